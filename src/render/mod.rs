//! Plan rendering.
//!
//! Each renderer consumes the immutable `Plan` and produces a complete
//! output document as a string; the caller decides where it goes. The plan
//! carries everything a renderer needs, so no format leaks back into the
//! builder.

pub mod html;
pub mod json;
pub mod text;

use std::fmt;

use clap::ValueEnum;
use color_eyre::eyre::Result;

use crate::plan::Plan;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable hierarchy dump
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
    /// Standalone HTML report
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        })
    }
}

/// Render `plan` in the requested format
pub fn render(plan: &Plan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(plan)),
        OutputFormat::Json => json::render(plan),
        OutputFormat::Html => Ok(html::render(plan)),
    }
}
