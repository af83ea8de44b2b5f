//! Report formatters — pure functions over a [`Finding`](crate::analysis::Finding).

pub mod json;
pub mod text;

pub use json::json_report;
pub use text::{text_report, ReportSections};
