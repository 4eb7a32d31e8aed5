//! Site-logo detection and logo-URL resolution.
//!
//! Logos are guessed, not declared: the locator walks an ordered search
//! space of (attribute, alias) pairs over the document's `<img>` elements
//! and returns the first qualifying hit. The companion resolver turns the
//! found reference (often relative) into a fetchable absolute URL.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::document::Document;

/// Attribute names searched for alias tokens, highest priority first.
const LOGO_ATTRS: [&str; 4] = ["class", "src", "id", "alt"];

/// Alias tokens suggesting an image is the site logo, highest priority first.
const LOGO_ALIASES: [&str; 5] = ["logo", "brand", "site", "company", "name"];

/// Recognized logo file extensions.
static IMAGE_EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|png|svg)$").expect("image-extension regex is valid"));

/// Find the most plausible site-logo image reference in the document.
///
/// For each (attribute, alias) pair, in order, the first `<img>` whose
/// attribute value contains the alias (case-insensitive) is examined once:
/// it qualifies only if its `src` ends in a recognized image extension.
/// A non-qualifying hit moves the search to the next pair, not to the next
/// element. First qualifying hit wins; `None` after all pairs are exhausted.
pub fn find_logo(document: &Document) -> Option<String> {
    for attr in LOGO_ATTRS {
        for alias in LOGO_ALIASES {
            if let Some(element) = document.find_first("img", attr, |value| {
                value.to_ascii_lowercase().contains(alias)
            }) {
                if let Some(src) = element.attr("src") {
                    if IMAGE_EXT_RE.is_match(src) {
                        debug!(attr, alias, src, "logo located");
                        return Some(src.to_string());
                    }
                }
            }
        }
    }
    None
}

/// Resolve a logo reference against the page it was found on.
///
/// Already-absolute references pass through untouched. Protocol-relative
/// references (`//cdn.example.com/logo.png`) adopt the page's scheme.
/// Everything else is appended to the page's `{scheme}://{authority}` root
/// with exactly one `/` separator; the page's path is deliberately not part
/// of the base.
pub fn resolve_logo_url(logo: &str, page_url: &Url) -> String {
    if logo.starts_with("//") {
        return format!("{}:{}", page_url.scheme(), logo);
    }
    if let Ok(parsed) = Url::parse(logo) {
        if parsed.has_host() {
            return logo.to_string();
        }
    }

    let mut base = format!("{}://{}", page_url.scheme(), page_url.authority());
    if !base.ends_with('/') && !logo.starts_with('/') {
        base.push('/');
    }
    base + logo
}
