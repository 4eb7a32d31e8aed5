//! `sitescout scan <url>...` — fetch pages and extract phones and logo.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::acquisition::{ClientConfig, FetchError, HttpClient};
use crate::cli::output::{self, Styled};
use crate::report::ScanReport;
use crate::scanner;

/// Parallel fetches in flight during a multi-URL scan.
const SCAN_CONCURRENCY: usize = 4;

/// Run the scan command.
pub async fn run(
    urls: &[String],
    timeout: u64,
    user_agent: &str,
    retries: u32,
    output_file: Option<&Path>,
) -> Result<()> {
    init_tracing();

    let client = HttpClient::new(ClientConfig {
        user_agent: user_agent.to_string(),
        timeout: Duration::from_secs(timeout),
        max_retries: retries,
    });

    // Fetches complete in arbitrary order; results are reported in the
    // order the URLs were given.
    let mut fetched: Vec<(String, _)> = client.get_many(urls, SCAN_CONCURRENCY).await;

    let s = Styled::new();
    let mut reports: Vec<ScanReport> = Vec::new();
    let mut failed = 0usize;

    for url in urls {
        let position = match fetched.iter().position(|(u, _)| u == url) {
            Some(p) => p,
            None => continue,
        };
        match fetched.remove(position).1 {
            Ok(page) => {
                let report = scanner::scan_page(&page);
                if !output::is_json() {
                    print_report(&report, &s);
                }
                reports.push(report);
            }
            Err(e) => {
                failed += 1;
                warn!(url = %url, error = %e, "scan failed");
                if !output::is_json() && !output::is_quiet() {
                    eprintln!("  {} {url}: {}", s.warn_sym(), describe_failure(&e));
                }
            }
        }
    }

    if output::is_json() {
        output::print_json(&reports);
    }

    if let Some(path) = output_file {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        if !output::is_json() && !output::is_quiet() {
            eprintln!("  {} Report written to {}", s.ok_sym(), path.display());
        }
    }

    if failed > 0 {
        bail!("{failed} of {} URL(s) failed", urls.len());
    }
    Ok(())
}

/// Human-readable scan result: final URL, phones, logo.
fn print_report(report: &ScanReport, s: &Styled) {
    println!("  {} {}", s.ok_sym(), report.final_url);
    if report.phone_numbers.is_empty() {
        println!("    phones: none");
    } else {
        for number in &report.phone_numbers {
            println!("    phone: {number}");
        }
    }
    match &report.logo_url {
        Some(url) => println!("    logo:  {url}"),
        None => println!("    logo:  none"),
    }
}

/// One-line failure description without the reqwest error chain noise.
fn describe_failure(e: &FetchError) -> String {
    match e {
        FetchError::Status { status, .. } => format!("HTTP {status}"),
        other => other.to_string(),
    }
}

/// Initialize tracing to stderr; stdout is reserved for results.
fn init_tracing() {
    let directive = if output::is_verbose() {
        "sitescout=debug"
    } else {
        "sitescout=info"
    };
    // try_init: the subscriber may already be installed when the command
    // runs inside a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
