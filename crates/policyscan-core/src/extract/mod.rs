//! Pattern extractors — pure functions over raw text.
//!
//! Each extractor is a single linear scan with a compiled pattern,
//! order-preserving and side-effect-free.

mod domains;
mod emails;
mod urls;

pub use domains::extract_domains;
pub use emails::extract_emails;
pub use urls::extract_urls;
