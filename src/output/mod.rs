//! Output formatting for command results.
//!
//! This module handles rendering a [`Outcome`]:
//! - [`terminal`] - Coloured text for terminals
//! - [`json`] - JSON via serde_json

mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::models::IpVersion;
use serde::Serialize;
use std::error::Error;

pub use json::render_json;
pub use terminal::{format_field, render_text};

/// Result of one command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Outcome {
    Version {
        value: String,
        version: IpVersion,
    },
    Expand {
        value: String,
        expanded: String,
    },
    Bin {
        value: String,
        bits: String,
    },
    Bits {
        value: String,
        prefix: u8,
    },
    InRange {
        value: String,
        range: String,
        result: bool,
    },
    InSubnet {
        value: String,
        range: String,
        result: bool,
    },
}

/// Render an outcome in the requested format.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => render_json(outcome),
    }
}
