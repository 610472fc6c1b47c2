//! Input collection and validation.
//!
//! This module turns raw user input - the comma-separated level list from
//! the command line and the interactive prompt answers - into validated
//! scalars for the plan builder. Malformed text is always a
//! `ValidationError`; nothing is silently coerced to a default.

use std::io::{BufRead, Write};

use color_eyre::eyre::{Context, Result};

use crate::plan::ValidationError;
use crate::prefix::NetworkPrefix;

/// Defaults matching the non-interactive flag defaults
pub const DEFAULT_SUBNET: &str = "3fff::/20";
pub const DEFAULT_POP_COUNT: u32 = 5;
pub const DEFAULT_PREFERRED_SIZE: u8 = 36;
pub const DEFAULT_LEVELS: &str = "44,48,64";

/// Fully validated inputs for one plan-generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub base: NetworkPrefix,
    pub pop_count: u32,
    pub preferred_size: u8,
    pub levels: Vec<u8>,
}

/// Parse a comma-separated list of subnet levels, e.g. `"44,48,64"` or
/// `"/44, /48"`.
///
/// Entries are whitespace-trimmed and may carry a leading `/`. An entry
/// that is not a number in 0-128 fails the whole list.
pub fn parse_levels(text: &str) -> Result<Vec<u8>, ValidationError> {
    let levels: Vec<u8> = text
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            let digits = entry.strip_prefix('/').unwrap_or(entry);
            digits
                .parse::<u8>()
                .ok()
                .filter(|level| *level <= 128)
                .ok_or_else(|| ValidationError::InvalidLevel(entry.to_string()))
        })
        .collect::<Result<_, _>>()?;

    if levels.is_empty() {
        return Err(ValidationError::EmptyLevels);
    }
    Ok(levels)
}

/// Parse a preferred prefix size that may carry a leading `/`, e.g. `"/36"`.
pub fn parse_preferred_size(text: &str) -> Result<u8, ValidationError> {
    let digits = text.strip_prefix('/').unwrap_or(text);
    digits
        .parse::<u8>()
        .ok()
        .filter(|size| (1..=128).contains(size))
        .ok_or_else(|| ValidationError::InvalidSizeText(text.to_string()))
}

/// Prompt for all plan parameters on `writer`, reading answers from
/// `reader`. An empty answer takes the documented default; a malformed
/// answer is an error rather than a silent fallback.
pub fn interactive_input(mut reader: impl BufRead, mut writer: impl Write) -> Result<PlanRequest> {
    let subnet_text = prompt(
        &mut reader,
        &mut writer,
        &format!("Enter base IPv6 subnet (default {}): ", DEFAULT_SUBNET),
    )?;
    let base: NetworkPrefix = if subnet_text.is_empty() {
        DEFAULT_SUBNET.parse()?
    } else {
        subnet_text.parse()?
    };

    let pop_text = prompt(
        &mut reader,
        &mut writer,
        &format!("Enter number of POPs (default {}): ", DEFAULT_POP_COUNT),
    )?;
    let pop_count = if pop_text.is_empty() {
        DEFAULT_POP_COUNT
    } else {
        pop_text
            .parse::<u32>()
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| ValidationError::InvalidPopCountText(pop_text.clone()))?
    };

    let size_text = prompt(
        &mut reader,
        &mut writer,
        &format!(
            "Enter preferred subnet size per POP (default /{}): ",
            DEFAULT_PREFERRED_SIZE
        ),
    )?;
    let preferred_size = if size_text.is_empty() {
        DEFAULT_PREFERRED_SIZE
    } else {
        parse_preferred_size(&size_text)?
    };

    let levels_text = prompt(
        &mut reader,
        &mut writer,
        &format!(
            "Enter subnet levels (comma separated, default {}): ",
            DEFAULT_LEVELS
        ),
    )?;
    let levels = if levels_text.is_empty() {
        parse_levels(DEFAULT_LEVELS)?
    } else {
        parse_levels(&levels_text)?
    };

    Ok(PlanRequest {
        base,
        pop_count,
        preferred_size,
        levels,
    })
}

/// Write one prompt and read one trimmed answer line
fn prompt(reader: &mut impl BufRead, writer: &mut impl Write, text: &str) -> Result<String> {
    write!(writer, "{}", text).context("Failed to write prompt")?;
    writer.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .context("Failed to read input")?;
    Ok(answer.trim().to_string())
}
