//! HTML report backend for gridform: renders a grid and its captured data
//! into a static, printable report layout.

mod generator;
pub use generator::{ReportOptions, to_html, to_html_with_report};
