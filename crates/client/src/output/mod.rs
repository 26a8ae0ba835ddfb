//! Output formatting.
//!
//! Every printable value is serializable for `--format json` and implements
//! [`pretty::Pretty`] for the default human-readable output.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;
use pretty::Pretty;

/// Renders `value` in the requested format.
pub fn format_output<T: Serialize + Pretty>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => value.pretty(),
    }
}
