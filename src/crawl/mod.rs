// src/crawl/mod.rs
// =============================================================================
// This module is the crawl side of site-scout: configuration, HTTP fetching,
// HTML link extraction, and the engine that ties them together.
//
// Layout:
// - config.rs: CrawlConfig and the defaults the CLI advertises
// - fetch.rs:  the reqwest client and single-page fetches
// - page.rs:   pulling href attributes out of HTML and resolving them
// - engine.rs: CrawlSession, the depth-first traversal, and CrawlReport
//
// The rest of the program only sees what's re-exported here: build a
// CrawlConfig, hand it to CrawlSession, run it, read the CrawlReport.
//
// Rust concepts:
// - Module privacy: the submodules are private; pub use picks the public API
// - Re-exports: callers write crawl::CrawlSession, not crawl::engine::...
// =============================================================================

mod config;
mod engine;
mod fetch;
mod page;

// Only what the rest of the binary names gets re-exported; the error types
// and the cancel handle travel through CrawlSession's signatures without
// being spelled out elsewhere
pub use config::{
    CrawlConfig, DEFAULT_DELAY_MS, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use engine::{CrawlReport, CrawlSession, CrawlWarning};
