//! Fetch → parse → extract orchestration.
//!
//! `scan_page` is the synchronous half: parse the body once, run both
//! extraction passes, resolve the logo reference against the page's final
//! URL. `scan` composes it with the async fetch. The `scraper` document is
//! `!Send`, so it is created and dropped entirely inside `scan_page` and
//! never crosses an await point.

use tracing::debug;

use crate::acquisition::{FetchError, FetchedPage, HttpClient};
use crate::document::Document;
use crate::extraction::logo::{find_logo, resolve_logo_url};
use crate::extraction::phones::extract_phone_numbers;
use crate::report::ScanReport;

/// Run both extraction passes over an already-fetched page.
///
/// Pure and synchronous; an empty body yields an empty report, not an error.
pub fn scan_page(page: &FetchedPage) -> ScanReport {
    let document = Document::parse(&page.body);

    let phone_numbers = extract_phone_numbers(&document.all_text());
    let logo_url = find_logo(&document).map(|logo| resolve_logo_url(&logo, &page.final_url));

    debug!(
        url = %page.url,
        phones = phone_numbers.len(),
        logo = logo_url.is_some(),
        "page scanned"
    );

    ScanReport {
        url: page.url.clone(),
        final_url: page.final_url.to_string(),
        status: page.status,
        fetched_at: page.fetched_at,
        phone_numbers,
        logo_url,
    }
}

/// Fetch a URL and scan it.
pub async fn scan(client: &HttpClient, url: &str) -> Result<ScanReport, FetchError> {
    let page = client.get(url).await?;
    Ok(scan_page(&page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use url::Url;

    fn fetched(body: &str, final_url: &str) -> FetchedPage {
        FetchedPage {
            url: final_url.to_string(),
            final_url: Url::parse(final_url).unwrap(),
            status: 200,
            content_type: Some("text/html".to_string()),
            body: body.to_string(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_scan_page_extracts_both_artifacts() {
        let page = fetched(
            r#"
        <html><body>
            <img class="site-logo" src="/img/logo.png">
            <p>Call us: (021) 555-1234 or 0800 123 456</p>
        </body></html>
        "#,
            "https://example.com/contact",
        );

        let report = scan_page(&page);
        assert_eq!(report.phone_numbers, vec!["(021) 555 1234", "0800 123 456"]);
        assert_eq!(
            report.logo_url.as_deref(),
            Some("https://example.com/img/logo.png")
        );
    }

    #[test]
    fn test_scan_page_empty_body_is_empty_report() {
        let report = scan_page(&fetched("", "https://example.com/"));
        assert!(report.phone_numbers.is_empty());
        assert!(report.logo_url.is_none());
        assert_eq!(report.status, 200);
    }

    #[test]
    fn test_scan_page_logo_resolved_against_final_url() {
        // The requested URL is irrelevant once redirects have landed the page
        // somewhere else; the final URL owns the references.
        let mut page = fetched(
            r#"<html><body><img class="logo" src="/l.svg"></body></html>"#,
            "https://www.example.com/home",
        );
        page.url = "https://example.com".to_string();

        let report = scan_page(&page);
        assert_eq!(report.url, "https://example.com");
        assert_eq!(
            report.logo_url.as_deref(),
            Some("https://www.example.com/l.svg")
        );
    }

    #[test]
    fn test_scan_page_absolute_logo_untouched() {
        let page = fetched(
            r#"<html><body><img alt="brand" src="https://cdn.other.com/l.svg"></body></html>"#,
            "https://example.com/",
        );
        let report = scan_page(&page);
        assert_eq!(report.logo_url.as_deref(), Some("https://cdn.other.com/l.svg"));
    }
}
