// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build a crawl configuration and a CrawlSession from them
// 3. Wire Ctrl-C to the session's cancel handle
// 4. Run the crawl and turn the report into rows
// 5. Print them (table or JSON), optionally write a CSV, and exit with a
//    proper code (0 = links found, 1 = no links, 2 = error)
//
// Output discipline: stdout carries ONLY the results (the table or the JSON
// document), so `site-scout example.com --json | jq` works. Progress lines,
// warnings and notices all go to stderr.
//
// Rust concepts used:
// - async/await: The crawl engine is async because of its network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - tokio::spawn: Runs the Ctrl-C listener alongside the crawl
// =============================================================================

// Module declarations - tells Rust about our other source files
mod classify;      // src/classify.rs - URL rules: validity, scope, extensions
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the crawl engine
mod export;        // src/export.rs - result rows, filtering, CSV output

use std::collections::BTreeMap;
use std::time::Duration;

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use crawl::{CrawlConfig, CrawlReport, CrawlSession, CrawlWarning, DEFAULT_USER_AGENT};
use export::LinkRow;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If the crawl could not run at all, print why and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished and found links
//   Ok(1) = crawl finished but found no links
//   Err  = the crawl could not run (bad seed, seed fetch failed, ...)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    eprintln!("🔍 Scanning domain: {}", cli.domain);
    eprintln!("📊 Max crawl depth: {}", cli.max_depth);

    if cli.insecure {
        eprintln!("⚠️  TLS certificate verification is OFF (--insecure)");
    }

    let config = CrawlConfig {
        max_depth: cli.max_depth,
        delay: Duration::from_millis(cli.delay_ms),
        timeout: Duration::from_secs(cli.timeout_secs),
        user_agent: cli
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        accept_invalid_certs: cli.insecure,
    };

    let session = CrawlSession::new(&cli.domain, config)?;

    // Ctrl-C flips the session's cancel flag; the crawl stops before its
    // next fetch and we still get a (partial) report to render below
    let cancel = session.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n⚠️  Ctrl-C received, stopping the crawl...");
            cancel.cancel();
        }
    });

    let report = session.run().await?;

    // Filtering is presentation-only: the report itself keeps every link,
    // the flags just narrow what gets shown and saved
    let only: Vec<String> = cli
        .only
        .iter()
        .map(|ext| export::normalize_type_filter(ext))
        .collect();
    let rows = export::filter_rows(export::build_rows(&report.links), &only, cli.skip_html);

    if let Some(path) = &cli.output {
        export::write_csv(path, &rows)?;
        eprintln!("📥 Wrote {} row(s) to {}", rows.len(), path.display());
    }

    if cli.json {
        print_json(&report, &rows)?;
    } else {
        print_table(&rows);
        print_summary(&report, &rows);
    }

    if report.cancelled {
        eprintln!("⚠️  Crawl was cancelled - results are partial");
    }

    if report.links.is_empty() {
        eprintln!("❌ No links found on {}", report.seed);
        Ok(1)  // Exit code 1 = nothing discovered
    } else {
        Ok(0)  // Exit code 0 = links found
    }
}

// The JSON document we print for --json: the filtered rows plus the
// crawl-wide numbers from the report
//
// The lifetime 'a says this struct only borrows its data; it exists just
// long enough to be serialized
#[derive(Serialize)]
struct JsonReport<'a> {
    seed: &'a str,
    pages_fetched: usize,
    cancelled: bool,
    links: &'a [LinkRow],
    extensions: &'a BTreeMap<String, usize>,
    warnings: &'a [CrawlWarning],
}

// Serializes the report to pretty JSON and prints it to stdout
fn print_json(report: &CrawlReport, rows: &[LinkRow]) -> Result<()> {
    let output = JsonReport {
        seed: &report.seed,
        pages_fetched: report.pages_fetched,
        cancelled: report.cancelled,
        links: rows,
        extensions: &report.extensions,
        warnings: &report.warnings,
    };

    let json_output = serde_json::to_string_pretty(&output)?;
    println!("{}", json_output);
    Ok(())
}

// Prints the rows as a human-readable table in the terminal
fn print_table(rows: &[LinkRow]) {
    // Print table header
    println!("{:<70} {:<8}", "URL", "TYPE");
    println!("{}", "=".repeat(78));

    // Print each row
    for row in rows {
        // Truncate URL if too long for display
        let url_display = if row.url.len() > 67 {
            format!("{}...", &row.url[..67])
        } else {
            row.url.clone()
        };

        println!("{:<70} {:<8}", url_display, row.kind);
    }

    println!();
}

// Prints the crawl-wide summary below the table
fn print_summary(report: &CrawlReport, rows: &[LinkRow]) {
    println!("📊 Summary:");
    println!("   📄 Pages fetched: {}", report.pages_fetched);
    println!("   🔗 Links discovered: {}", report.links.len());

    // Only worth a line when the filters actually hid something
    if rows.len() != report.links.len() {
        println!("   🔎 Shown after filters: {}", rows.len());
    }

    // The tally is a BTreeMap, so this prints in alphabetical order
    for (ext, count) in &report.extensions {
        println!("   📁 {} ({})", ext, count);
    }

    if !report.warnings.is_empty() {
        println!("   ⚠️  Fetch warnings: {}", report.warnings.len());
    }
}
