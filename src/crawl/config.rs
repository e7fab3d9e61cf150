// src/crawl/config.rs
// =============================================================================
// Tuning knobs for a crawl session, with conservative defaults.
//
// Defaults:
// - Depth 2: the seed, its pages, and their pages
// - 500ms pause between requests (politeness)
// - 30 second timeout per request
// - A browser-like User-Agent, since some sites reject unknown clients
// - TLS certificate verification ON (turning it off is an explicit,
//   loudly-warned choice in the CLI)
// =============================================================================

use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Settings for one crawl session
//
// Build one with struct update syntax when you only care about a field:
//   CrawlConfig { max_depth: 1, ..CrawlConfig::default() }
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// How many link hops below the seed to descend (0 = seed page only)
    pub max_depth: usize,
    /// Pause inserted before every fetch below the seed
    pub delay: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Skip TLS certificate verification. Dangerous; keep this false unless
    /// you are debugging a host you control.
    pub accept_invalid_certs: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}
