//! Sitescout library — best-effort contact extraction from web pages.
//!
//! Fetches a page and pulls out two heuristically-identified artifacts:
//! candidate phone numbers from the page text, and a URL pointing at the
//! site logo image. This library crate exposes the modules so integration
//! tests can drive the full pipeline.

pub mod acquisition;
pub mod cli;
pub mod document;
pub mod extraction;
pub mod report;
pub mod scanner;
