//! JSON output.

use super::Outcome;
use std::error::Error;

/// Serialize an outcome as a single-line JSON object.
pub fn render_json(outcome: &Outcome) -> Result<String, Box<dyn Error>> {
    serde_json::to_string(outcome).map_err(|e| format!("Error serializing JSON: {e}").into())
}
