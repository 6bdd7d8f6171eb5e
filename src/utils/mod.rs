//! Shared utilities
//!
//! - Formatting: thousands separators and the display forms used by the
//!   report cards and chart labels

pub mod formatting;

pub use formatting::{format_dollars, format_integer, format_thousands, format_usd};
