//! Heuristic extraction over parsed documents.
//!
//! Two independent passes share one parsed document: the phone extractor
//! consumes its raw text, the logo locator consumes its image elements.
//! Both are pure, synchronous, and best-effort.

pub mod logo;
pub mod phones;
