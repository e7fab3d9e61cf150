// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// site-scout does one thing (crawl a domain), so there are no subcommands:
// the whole interface is a single struct with one positional argument and
// a handful of flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: A value that may or may not be present
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::crawl::{DEFAULT_DELAY_MS, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-scout",
    version = "0.1.0",
    about = "A CLI tool to map a website's internal links and file types",
    long_about = "site-scout crawls a domain (staying inside it), collects every internal link \
                  it finds, and classifies each one by file extension. Results come out as a \
                  table, JSON, or a CSV file - handy for content audits and site inventories."
)]
pub struct Cli {
    /// Domain or URL to crawl (e.g., example.com or https://example.com/docs)
    ///
    /// This is a positional argument (required, no flag needed).
    /// A bare domain gets "https://" prepended automatically.
    pub domain: String,

    /// Maximum crawl depth, between 1 and 3 (default: 2)
    ///
    /// This controls how many levels deep we follow page links from the
    /// starting page:
    /// Depth 1 = the starting page + the pages it links to
    /// Depth 2 = one level further, and so on
    ///
    /// The range is capped at 3 to keep crawls polite and bounded.
    ///
    /// value_parser! can't attach a range to usize (only to the fixed-width
    /// integer types), so the ranged parser is spelled out.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=3)
    )]
    pub max_depth: usize,

    /// Output results in JSON format instead of a table
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// Write the (filtered) links to a CSV file at this path
    ///
    /// Example: --output links.csv
    /// The file gets a "url,type" header row.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only show links with these extensions (comma-separated)
    ///
    /// Example: --only pdf,jpg  or  --only .pdf
    /// The leading dot and letter case don't matter.
    /// Page links (no extension) are unaffected; use --skip-html for those.
    #[arg(long, value_name = "EXT", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Hide extension-less page links from the output
    #[arg(long)]
    pub skip_html: bool,

    /// Delay between page requests in milliseconds (default: 500)
    ///
    /// The first request goes out immediately; every request after that
    /// waits this long. Raise it for fragile servers, lower it for your own.
    #[arg(long, default_value_t = DEFAULT_DELAY_MS, value_name = "MS")]
    pub delay_ms: u64,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout_secs: u64,

    /// Custom User-Agent header for requests
    ///
    /// Defaults to a desktop-browser string, which many sites expect.
    #[arg(long, value_name = "STRING")]
    pub user_agent: Option<String>,

    /// Accept invalid TLS certificates (use only for sites you control)
    #[arg(long)]
    pub insecure: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Where do the flag names come from?
//    - clap turns each snake_case field into a kebab-case flag
//    - max_depth becomes --max-depth, skip_html becomes --skip-html
//
// 2. What does RangedU64ValueParser::<usize>::new().range(1..=3) do?
//    - Rejects out-of-range values at parse time with a clear error
//    - The rest of the program never has to re-validate the depth
//    - The usual value_parser!(T).range(...) shorthand only works for
//      fixed-width integers like u64; for usize the parser is named directly
//
// 3. What does value_delimiter = ',' do?
//    - Splits one argument into several values: --only pdf,jpg
//    - The field is a Vec<String>, so repeating --only also works
//
// 4. Why Option<PathBuf> for output?
//    - None means "the user didn't ask for a file", no sentinel needed
//    - PathBuf is the owned path type, like String but for file paths
//
// 5. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
