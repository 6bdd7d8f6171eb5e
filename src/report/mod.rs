//! Impact report
//!
//! Turns a scenario's metrics into display-ready cards, the baseline vs
//! projection table and the closing notes, with Markdown, JSON and HTML
//! renderings.

pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{ComparisonRow, ImpactReport, MetricCard};
pub use generator::{ReportGenerator, REPORT_SUBTITLE, REPORT_TITLE};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
