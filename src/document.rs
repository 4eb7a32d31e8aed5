//! Minimal queryable view over a parsed HTML document.
//!
//! The extractors need exactly two capabilities from the HTML library: the
//! document's full text as one string, and a first-match search for elements
//! of a tag whose attribute value satisfies a predicate. Wrapping `scraper`
//! behind this surface keeps the extraction code library-agnostic and lets
//! tests build fixture documents from inline HTML.
//!
//! `scraper`'s types are `!Send` — parse, query, and drop a `Document` on one
//! thread, and keep it out of anything held across an await point.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

/// A borrowed element handle exposing attribute lookup.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// Parse an HTML string into a queryable document.
    ///
    /// Parsing never fails: malformed markup yields whatever tree the HTML5
    /// recovery algorithm produces, possibly empty.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All text content of the document concatenated in document order.
    ///
    /// No separator is inserted and whitespace is left untouched: the phone
    /// pipeline depends on the raw spacing and newlines between text nodes.
    pub fn all_text(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// Find the first element with the given tag, in document order, whose
    /// `attr` value satisfies `pred`. Elements lacking the attribute never
    /// match.
    pub fn find_first<F>(&self, tag: &str, attr: &str, pred: F) -> Option<Element<'_>>
    where
        F: Fn(&str) -> bool,
    {
        let selector = Selector::parse(tag).ok()?;
        self.html
            .select(&selector)
            .find(|el| el.value().attr(attr).map(&pred).unwrap_or(false))
            .map(|element| Element { element })
    }
}

impl<'a> Element<'a> {
    /// Look up an attribute value on this element.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_text_concatenates_in_order() {
        let doc = Document::parse(
            r#"
        <html><body>
            <h1>Acme Corp</h1>
            <p>Call <b>today</b>: 0800 123 456</p>
        </body></html>
        "#,
        );
        let text = doc.all_text();
        // Inline elements contribute text without extra separators
        assert!(text.contains("Call today: 0800 123 456"));
        let h1 = text.find("Acme Corp").unwrap();
        let call = text.find("Call").unwrap();
        assert!(h1 < call);
    }

    #[test]
    fn test_all_text_preserves_whitespace() {
        let doc = Document::parse("<html><body><p>021  555</p></body></html>");
        assert!(doc.all_text().contains("021  555"));
    }

    #[test]
    fn test_find_first_matches_predicate() {
        let doc = Document::parse(
            r#"
        <html><body>
            <img class="hero" src="/hero.jpg">
            <img class="site-logo" src="/logo.png">
        </body></html>
        "#,
        );
        let el = doc
            .find_first("img", "class", |v| v.contains("logo"))
            .unwrap();
        assert_eq!(el.attr("src"), Some("/logo.png"));
    }

    #[test]
    fn test_find_first_returns_first_in_document_order() {
        let doc = Document::parse(
            r#"
        <html><body>
            <img class="logo-a" src="/a.png">
            <img class="logo-b" src="/b.png">
        </body></html>
        "#,
        );
        let el = doc
            .find_first("img", "class", |v| v.contains("logo"))
            .unwrap();
        assert_eq!(el.attr("src"), Some("/a.png"));
    }

    #[test]
    fn test_find_first_skips_elements_without_attribute() {
        let doc = Document::parse(
            r#"
        <html><body>
            <img src="/bare.png">
            <img alt="company badge" src="/badge.svg">
        </body></html>
        "#,
        );
        let el = doc
            .find_first("img", "alt", |v| v.contains("company"))
            .unwrap();
        assert_eq!(el.attr("src"), Some("/badge.svg"));
    }

    #[test]
    fn test_find_first_none_when_no_match() {
        let doc = Document::parse("<html><body><img src=\"/x.png\"></body></html>");
        assert!(doc.find_first("img", "class", |v| v.contains("logo")).is_none());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("");
        assert_eq!(doc.all_text(), "");
        assert!(doc.find_first("img", "class", |_| true).is_none());
    }
}
