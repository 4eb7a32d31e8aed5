//! Candidate phone-number extraction from page text.
//!
//! A deliberately permissive "wide net" pattern overselects number-ish runs
//! from the raw text, then a pipeline of cheap filters whittles the matches
//! down: calendar dates, bare ID numbers, years, and candidates with an
//! implausible digit count all drop out. Survivors keep their discovery
//! order and are deduplicated by digit-only projection, so the same number
//! formatted two different ways is reported once.
//!
//! No attempt is made to validate numbers against a national numbering plan;
//! the output is best-effort candidates, not verified phone numbers.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Plausible digit-count range for a phone number (E.164-inspired).
const MIN_DIGITS: usize = 6;
const MAX_DIGITS: usize = 15;

// ── Patterns (compiled once) ─────────────────────────────────────────────────

/// Wide net: optional `+`s, optional paren, 1-4 digits, then a run of digits
/// and common separators, ending at the next character outside that set.
static WIDE_NET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+]*[(]?[0-9]{1,4}[)]?[-\s./()0-9]*").expect("wide-net regex is valid")
});

/// Calendar-date shape (`2024-05-01`) at the start of a candidate.
static DATE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\b").expect("date-shape regex is valid"));

/// A run of two or more whitespace characters.
static MULTI_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("whitespace-run regex is valid"));

/// Any character that cannot appear in a formatted phone number.
static FOREIGN_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9+\s()-]").expect("character-class regex is valid"));

/// Five or more digits at the start of a segment (serials, postcodes, IDs).
static LEADING_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5,}").expect("leading-run regex is valid"));

/// Three or four digits at the start where the first is 1-9. Catches years
/// and short codes while letting `0`-prefixed dialing formats through.
static YEAR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d{2,3}").expect("year-prefix regex is valid"));

// ── Extraction ───────────────────────────────────────────────────────────────

/// Extract candidate phone numbers from raw page text.
///
/// Returns the surviving candidates in order of first appearance, with no
/// two entries sharing the same digit-only projection. An empty vec means
/// nothing in the text looked like a phone number.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for found in WIDE_NET_RE.find_iter(text) {
        let cleaned = found
            .as_str()
            .trim()
            .replace("  ", "")
            .replace('\u{a0}', "-");

        if DATE_SHAPE_RE.is_match(&cleaned) {
            continue;
        }

        // A single match can span lines; each line is judged on its own.
        for segment in cleaned.split('\n') {
            if let Some(number) = filter_segment(segment) {
                candidates.push(number);
            }
        }
    }

    let unique = dedup_candidates(candidates);
    debug!(count = unique.len(), "phone extraction finished");
    unique
}

/// Run one segment through the filter pipeline. Returns the normalized
/// candidate, or `None` if any stage rejects it.
fn filter_segment(segment: &str) -> Option<String> {
    let digit_count = segment.chars().filter(char::is_ascii_digit).count();
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digit_count) {
        return None;
    }

    let stripped = segment
        .trim_matches(|c| c == '.' || c == ',')
        .trim_end_matches(|c| c == '(' || c == ' ');

    let spaced = stripped.replace('-', " ").replace('/', " ");

    // Whitespace runs are removed outright, not collapsed to one space;
    // adjacent digit groups merge as a result.
    let collapsed = MULTI_WS_RE.replace_all(&spaced, "").into_owned();

    if FOREIGN_CHAR_RE.is_match(&collapsed) {
        return None;
    }
    // All-digit survivors are IDs or area codes, not formatted numbers.
    if !collapsed.chars().any(|c| !c.is_ascii_digit()) {
        return None;
    }
    if LEADING_RUN_RE.is_match(&collapsed) {
        return None;
    }
    if YEAR_PREFIX_RE.is_match(&collapsed) {
        return None;
    }

    Some(collapsed)
}

/// Digit-only projection of a candidate, used as its deduplication key.
fn digit_projection(candidate: &str) -> String {
    candidate.chars().filter(char::is_ascii_digit).collect()
}

/// Drop candidates whose digit-only projection was already seen, keeping the
/// first occurrence. Catches duplicates that differ only in formatting,
/// which an exact-string set would keep.
fn dedup_candidates(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if seen.insert(digit_projection(&candidate)) {
            unique.push(candidate);
        }
    }
    unique
}

// ── Tests ────────────────────────────────────────────────────────────────────
