//! Document acquisition: turning a URL into page content.
//!
//! Everything network-related lives here, behind an explicit success/failure
//! contract. The extractors downstream never see a transport error — they
//! only ever receive a page that was actually fetched.

pub mod http_client;

pub use http_client::{ClientConfig, FetchError, FetchedPage, HttpClient};
