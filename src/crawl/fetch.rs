// src/crawl/fetch.rs
// =============================================================================
// This module owns the HTTP side of the crawl: building the client and
// fetching a single page.
//
// Key functionality:
// - One reqwest Client per crawl session (connection pooling for free)
// - Per-request timeout and a browser-like User-Agent from the config
// - Non-2xx responses are failures, reported with their status line
// - Transport problems (timeout, DNS, TLS, refused connection) come back
//   as a typed error instead of a catch-all
//
// Rust concepts:
// - thiserror: Derive macro that writes the Display and Error impls for us
// - #[from]: Automatic conversion so `?` works on reqwest::Error
// - async/await: Network I/O without blocking the runtime
// =============================================================================

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::crawl::config::CrawlConfig;

// Why a fetch can fail, from the crawler's point of view.
//
// The two cases matter to callers in different ways: a Status failure means
// the server answered but said no; Transport means we never got an answer.
// Both are reported the same way in warnings, but keeping them separate
// costs nothing and makes tests precise.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server responded with a non-success status code
    #[error("HTTP {0}")]
    Status(StatusCode),
    /// The request never completed: timeout, DNS, TLS, connection refused...
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

// Builds the HTTP client used for every request in one crawl session.
//
// danger_accept_invalid_certs is wired to the config's insecure flag; the
// method name is reqwest's own way of making sure nobody turns it on by
// accident.
pub fn build_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
}

// Fetches a page and returns its body as text.
//
// Redirects have already been followed by the client when we see the
// response, so a 301 that lands on a 200 counts as success.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    Ok(body)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does thiserror generate?
//    - impl Display using the #[error("...")] format strings
//    - impl std::error::Error, including source() chaining
//    - Without it, you'd write ~20 lines of boilerplate per error type
//
// 2. What is #[error(transparent)]?
//    - "This variant IS the inner error" - Display and source() delegate
//      straight to the wrapped reqwest::Error
//    - Used when wrapping adds no information of its own
//
// 3. Why does #[from] matter?
//    - It generates From<reqwest::Error> for FetchError
//    - That's what lets fetch_page use `?` on reqwest calls directly
//
// 4. Why clone the user agent string into the builder?
//    - ClientBuilder::user_agent takes ownership of its value
//    - The config keeps its copy; the client gets its own
//
// 5. Why limit redirects to 5?
//    - Normal sites need one or two hops (http->https, trailing slash)
//    - A loop of redirects would otherwise count against the timeout
//      and produce a confusing error
// -----------------------------------------------------------------------------
