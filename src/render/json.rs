//! JSON report over the serde model.

use color_eyre::eyre::{Context, Result};

use crate::plan::Plan;

/// Render the plan as pretty-printed JSON
pub fn render(plan: &Plan) -> Result<String> {
    serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")
}
