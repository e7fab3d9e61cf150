// src/crawl/engine.rs
// =============================================================================
// This module is the crawl engine. One CrawlSession owns every piece of
// crawl state and drives the whole traversal.
//
// How a crawl works:
// 1. Normalize the seed ("example.com" becomes "https://example.com")
// 2. Put the seed on a work list at depth 0
// 3. Pop a URL, claim it in the visited set, fetch it, parse the HTML
// 4. Classify every link on the page: same-domain links are recorded,
//    extension-bearing ones are tallied, page-like ones go back on the
//    work list one level deeper (if the depth budget allows)
// 5. Repeat until the work list is empty or the crawl is cancelled
//
// The work list is a stack, so traversal is depth-first: one branch is
// followed all the way down before the next link on the seed page gets its
// turn. Each page's links are pushed in reverse so they pop in document
// order.
//
// Politeness:
// - A configurable pause before every fetch below the seed
// - Only same-domain pages are ever fetched
//
// Rust concepts:
// - HashSet: visited set and link set (O(1) membership checks)
// - BTreeMap: extension tally, sorted by key for stable output
// - Arc<AtomicBool>: the cancellation flag shared with the Ctrl-C handler
// =============================================================================

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::classify;
use crate::crawl::config::CrawlConfig;
use crate::crawl::fetch::{self, FetchError};
use crate::crawl::page;

// One entry on the work list: a URL plus how many hops below the seed it sits
#[derive(Debug, Clone)]
struct WorkItem {
    url: String,
    depth: usize,
}

// Why a crawl could not run at all.
//
// Per-page problems never show up here; they become warnings in the report
// and the crawl keeps going. These three are the cases where there is no
// report to give back.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed couldn't be turned into an absolute URL with a host
    #[error("invalid seed URL: {0}")]
    InvalidSeed(String),
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The very first fetch failed, so nothing was crawled
    #[error("failed to fetch seed {url}: {source}")]
    SeedFetch { url: String, source: FetchError },
}

/// A fetch that failed below the seed, reported without stopping the crawl.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlWarning {
    /// The URL that could not be fetched
    pub url: String,
    /// What went wrong, e.g. "HTTP 404 Not Found"
    pub reason: String,
}

/// Everything a finished crawl hands back to the caller.
///
/// The report is read-only output: the session that produced it is gone by
/// the time you hold one.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// The normalized seed URL the crawl started from
    pub seed: String,
    /// Every same-domain link discovered, deduplicated and sorted
    pub links: Vec<String>,
    /// Extension token -> how many discovered links carried it
    pub extensions: BTreeMap<String, usize>,
    /// Per-page fetch failures the crawl continued past
    pub warnings: Vec<CrawlWarning>,
    /// How many pages were actually fetched and parsed
    pub pages_fetched: usize,
    /// True when the crawl was cancelled and the results are partial
    pub cancelled: bool,
}

// A cloneable switch that stops a running crawl.
//
// The engine checks it before every fetch; flipping it makes run() return
// early with whatever has been gathered so far. Clones all share one flag,
// so the copy handed to a Ctrl-C task controls the same crawl.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Asks the crawl to stop. Idempotent; there is no un-cancel.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One crawl, from seed to report.
///
/// All mutable crawl state (visited set, link set, extension tally,
/// warnings) lives in the session and nowhere else. A session is
/// single-use: build it, optionally grab the cancel handle, then call
/// run(), which consumes it.
#[derive(Debug)]
pub struct CrawlSession {
    config: CrawlConfig,
    base: Url,
    base_authority: String,
    cancel: CancelHandle,
    visited: HashSet<String>,
    links: HashSet<String>,
    extensions: BTreeMap<String, usize>,
    warnings: Vec<CrawlWarning>,
    pages_fetched: usize,
}

impl CrawlSession {
    /// Prepares a crawl of `domain` (a bare domain or a full URL).
    ///
    /// Fails only when the seed can't be parsed into a URL with a host.
    /// No network traffic happens here.
    pub fn new(domain: &str, config: CrawlConfig) -> Result<Self, CrawlError> {
        let seed = classify::normalize_seed(domain);

        let mut base =
            Url::parse(&seed).map_err(|_| CrawlError::InvalidSeed(domain.to_string()))?;
        // Links are compared fragment-free, so the seed must be too
        base.set_fragment(None);

        let base_authority = classify::authority(&base)
            .ok_or_else(|| CrawlError::InvalidSeed(domain.to_string()))?;

        Ok(Self {
            config,
            base,
            base_authority,
            cancel: CancelHandle::default(),
            visited: HashSet::new(),
            links: HashSet::new(),
            extensions: BTreeMap::new(),
            warnings: Vec::new(),
            pages_fetched: 0,
        })
    }

    /// A handle that can stop this crawl from another task.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Runs the crawl to completion (or cancellation) and returns the report.
    ///
    /// The only errors are a failed client build and a failed seed fetch;
    /// everything after the seed succeeds degrades into warnings.
    pub async fn run(mut self) -> Result<CrawlReport, CrawlError> {
        let client = fetch::build_client(&self.config)?;

        // Depth-first work list; the seed starts it at depth 0
        let mut work = vec![WorkItem {
            url: self.base.to_string(),
            depth: 0,
        }];

        while let Some(item) = work.pop() {
            // Checked before each fetch, so cancelling never waits on a
            // request that hasn't started yet
            if self.cancel.is_cancelled() {
                break;
            }

            // Entry guards: over the depth budget, or already claimed.
            // The insert doubles as the claim - the same URL can sit in
            // the work list twice when two pages link to it, and only the
            // first pop gets to fetch it.
            if item.depth > self.config.max_depth {
                continue;
            }
            if !self.visited.insert(item.url.clone()) {
                continue;
            }

            // Politeness pause before every fetch below the seed
            if item.depth > 0 {
                tokio::time::sleep(self.config.delay).await;
            }

            eprintln!("  Crawling [depth {}]: {}", item.depth, item.url);

            let html = match fetch::fetch_page(&client, &item.url).await {
                Ok(html) => html,
                Err(e) if item.depth == 0 => {
                    // Nothing was crawled; the caller gets a hard error
                    // instead of an empty report with a buried warning
                    return Err(CrawlError::SeedFetch {
                        url: item.url,
                        source: e,
                    });
                }
                Err(e) => {
                    eprintln!("  Warning: Failed to fetch {}: {}", item.url, e);
                    self.warnings.push(CrawlWarning {
                        url: item.url,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            self.pages_fetched += 1;

            // Push in reverse so the page's links pop in document order
            for url in self.expand(&html, &item.url, item.depth).into_iter().rev() {
                work.push(WorkItem {
                    url,
                    depth: item.depth + 1,
                });
            }
        }

        Ok(self.into_report())
    }

    // Classifies every link on a fetched page, updating the link set and the
    // extension tally. Returns the links worth descending into.
    fn expand(&mut self, html: &str, page_url: &str, depth: usize) -> Vec<String> {
        let mut descend = Vec::new();

        for link in page::extract_links(html, page_url) {
            if !classify::is_valid_url(&link) {
                continue;
            }
            if !classify::is_same_domain(&link, &self.base_authority) {
                continue;
            }

            let first_discovery = self.links.insert(link.clone());

            match classify::extract_extension(&link) {
                Some(ext) => {
                    // A file: recorded and tallied once, never fetched
                    if first_discovery {
                        *self.extensions.entry(ext).or_insert(0) += 1;
                    }
                }
                None => {
                    // A page: descend if the depth budget allows. The
                    // visited check here is just a fast path; the claim at
                    // pop time is what actually prevents double fetches.
                    if depth < self.config.max_depth && !self.visited.contains(&link) {
                        descend.push(link);
                    }
                }
            }
        }

        descend
    }

    fn into_report(self) -> CrawlReport {
        let mut links: Vec<String> = self.links.into_iter().collect();
        links.sort();

        CrawlReport {
            seed: self.base.to_string(),
            links,
            extensions: self.extensions,
            warnings: self.warnings,
            pages_fetched: self.pages_fetched,
            cancelled: self.cancel.is_cancelled(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a work list instead of recursion?
//    - A recursive crawl nests one call per depth level; a deep site means
//      a deep call stack
//    - With an explicit Vec<WorkItem> the "recursion" is just data, the
//      stack depth stays constant, and we can break out of the loop for
//      cancellation at any point
//    - pop() from the end of a Vec makes it LIFO = depth-first
//
// 2. What does visited.insert() return?
//    - true if the value was NOT in the set (it was inserted now)
//    - false if it was already there
//    - That single call is both the membership test and the claim, so
//      there's no gap where two copies of a URL could both pass a
//      contains() check and both get fetched
//
// 3. Why claim BEFORE fetching instead of after?
//    - If a fetch fails, the URL stays claimed - rediscovering it on
//      another page won't retry it
//    - It also keeps "no URL is fetched twice" true even if fetches ever
//      become concurrent: whoever inserts first wins
//
// 4. Why is the tally guarded by first_discovery?
//    - Ten pages linking to the same brochure.pdf is still one brochure
//    - The link set already deduplicates the URLs; tallying on first
//      insert keeps the counts in sync with it
//
// 5. What is Ordering::Relaxed?
//    - The weakest memory ordering for atomics
//    - Fine here because the flag is a lone boolean - nothing else has to
//      "happen before" observing it, and a fetch too many is harmless
//
// 6. Why does run(mut self) consume the session?
//    - A crawl is single-use; consuming self makes re-running one a
//      compile error instead of a silent re-crawl with stale state
// -----------------------------------------------------------------------------
