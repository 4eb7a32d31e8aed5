//! Scan result type serialized for `--json` output and `--output` files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything extracted from one scanned page.
///
/// One report per URL; the `--json` CLI mode prints these verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// URL as the caller requested it.
    pub url: String,
    /// Final URL after redirects; references were resolved against this.
    pub final_url: String,
    /// HTTP status of the final response.
    pub status: u16,
    /// When the page was fetched.
    pub fetched_at: DateTime<Utc>,
    /// Candidate phone numbers in order of first appearance, deduplicated
    /// by digit-only projection. Empty when nothing qualified.
    pub phone_numbers: Vec<String>,
    /// Fully-qualified logo URL, if a logo image was located.
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;

    #[test]
    fn test_report_json_shape() {
        let report = ScanReport {
            url: "https://example.com".to_string(),
            final_url: "https://example.com/".to_string(),
            status: 200,
            fetched_at: Utc::now(),
            phone_numbers: vec!["0800 123 456".to_string()],
            logo_url: Some("https://example.com/logo.png".to_string()),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_json_include!(
            actual: value,
            expected: serde_json::json!({
                "url": "https://example.com",
                "final_url": "https://example.com/",
                "status": 200,
                "phone_numbers": ["0800 123 456"],
                "logo_url": "https://example.com/logo.png",
            })
        );
    }

    #[test]
    fn test_report_round_trips() {
        let report = ScanReport {
            url: "https://example.com".to_string(),
            final_url: "https://example.com/".to_string(),
            status: 200,
            fetched_at: Utc::now(),
            phone_numbers: vec![],
            logo_url: None,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: ScanReport = serde_json::from_str(&json).unwrap();
        assert!(back.phone_numbers.is_empty());
        assert!(back.logo_url.is_none());
    }
}
