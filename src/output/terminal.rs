//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use super::Outcome;
use colored::Colorize;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Render an outcome as one line of coloured text.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Version { value, version } => {
            format!("{} => {}", format_field(value, 39), version.to_string().green())
        }
        Outcome::Expand { value, expanded } => {
            format!("{} => {}", format_field(value, 39), expanded.green())
        }
        Outcome::Bin { value, bits } => {
            format!("{} => {}", format_field(value, 39), bits.cyan())
        }
        Outcome::Bits { value, prefix } => {
            format!("{} => /{}", format_field(value, 39), prefix.to_string().green())
        }
        Outcome::InRange {
            value,
            range,
            result,
        }
        | Outcome::InSubnet {
            value,
            range,
            result,
        } => {
            let verdict = if *result {
                "inside".green()
            } else {
                "outside".on_red()
            };
            format!("{} {} {}", format_field(value, 39), verdict, range)
        }
    }
}
