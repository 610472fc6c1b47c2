//! Hierarchical plan generation.
//!
//! This module turns validated inputs into a complete `Plan`: global
//! per-level subnet counts relative to the base prefix, then one allocation
//! block per POP with a representative subnet at each configured level.
//!
//! Generation is a single deterministic pass. Advisory conditions (a POP
//! count that does not fit the preferred size, a level that is not deeper
//! than the POP block) are collected as `PlanWarning` values and returned
//! alongside the plan instead of being printed from inside the builder.

use serde::Serialize;

use crate::prefix::{available_subnets, NetworkPrefix};

/// Errors for inputs that would produce a meaningless plan
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POP count must be at least 1, got {0}")]
    InvalidPopCount(u32),

    #[error("preferred POP subnet size /{0} is outside 1-128")]
    InvalidPreferredSize(u32),

    #[error("invalid subnet level '{0}': expected a prefix length between 0 and 128")]
    InvalidLevel(String),

    #[error("invalid POP count '{0}': expected a positive integer")]
    InvalidPopCountText(String),

    #[error("invalid preferred size '{0}': expected a prefix length between 1 and 128")]
    InvalidSizeText(String),

    #[error("subnet level list is empty")]
    EmptyLevels,

    #[error("{pop_count} POPs do not fit under a /{base_len} base prefix")]
    PopCountExceedsSpace { pop_count: u32, base_len: u8 },
}

/// Advisory conditions raised during plan generation.
///
/// Warnings never abort generation; the plan still reflects the documented
/// skip policy and the caller decides how to report them.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum PlanWarning {
    #[error("required prefix length /{required} is larger than preferred size /{preferred}")]
    PopBitsExceedPreferred { required: u8, preferred: u8 },

    #[error("subnet level /{level} is not more specific than POP size /{preferred}")]
    LevelNotDeeper { level: u8, preferred: u8 },
}

/// One capacity entry relative to the base prefix.
///
/// This tool performs no allocation tracking, so `available` always equals
/// `count` - both are the static capacity figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetCount {
    pub prefix_size: u8,
    pub count: u128,
    pub available: u128,
}

/// One representative subnet at one configured level within a POP.
///
/// Only the first subnet at each level is materialized - the plan samples
/// capacity, it does not enumerate every possible subnet. The label travels
/// with the detail so renderers never have to index a sibling list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetDetail {
    #[serde(skip)]
    pub label: String,
    pub cidr: String,
    pub count: u128,
    pub available: u128,
}

/// Allocation block for a single POP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopAllocation {
    pub pop_number: u32,
    pub pop_subnet: String,
    pub subnets: Vec<SubnetDetail>,
    pub level_names: Vec<String>,
}

/// The complete address plan. Immutable snapshot, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub base_subnet: String,
    pub pop_count: u32,
    pub preferred_size: u8,
    pub subnet_levels: Vec<u8>,
    pub pop_allocations: Vec<PopAllocation>,
    pub subnet_counts: Vec<SubnetCount>,
}

/// Build the full hierarchical plan for `base`.
///
/// `pop_count` must be at least 1 and `preferred_size` between 1 and 128;
/// both are rejected with a `ValidationError` before any arithmetic runs.
/// Levels not deeper than their parent are skipped per the warning policy,
/// never errors.
///
/// Level labels are numbered by position in the configured `levels` list, so
/// a skipped level leaves a gap in the numbering ("Level 1", "Level 3")
/// rather than renumbering the survivors.
pub fn build_plan(
    base: NetworkPrefix,
    pop_count: u32,
    preferred_size: u8,
    levels: &[u8],
) -> Result<(Plan, Vec<PlanWarning>), ValidationError> {
    if pop_count == 0 {
        return Err(ValidationError::InvalidPopCount(pop_count));
    }
    if preferred_size == 0 || preferred_size > 128 {
        return Err(ValidationError::InvalidPreferredSize(u32::from(preferred_size)));
    }
    if levels.is_empty() {
        return Err(ValidationError::EmptyLevels);
    }
    if let Some(&level) = levels.iter().find(|&&level| level > 128) {
        return Err(ValidationError::InvalidLevel(level.to_string()));
    }

    let mut warnings = Vec::new();

    // Global capacity per level, relative to the base prefix. Levels that
    // cannot subdivide the base are left out entirely.
    let subnet_counts: Vec<SubnetCount> = levels
        .iter()
        .filter(|&&level| level > base.len())
        .map(|&level| {
            let count = available_subnets(base.len(), level);
            SubnetCount {
                prefix_size: level,
                count,
                available: count,
            }
        })
        .collect();

    // Smallest bit width whose 2^b covers pop_count; a single POP needs none.
    let mut bits_needed: u8 = 0;
    while (1u128 << bits_needed) < u128::from(pop_count) {
        bits_needed += 1;
    }

    if u32::from(base.len()) + u32::from(bits_needed) > 128 {
        return Err(ValidationError::PopCountExceedsSpace {
            pop_count,
            base_len: base.len(),
        });
    }

    let pop_prefix_len = base.len() + bits_needed;
    if pop_prefix_len > preferred_size {
        warnings.push(PlanWarning::PopBitsExceedPreferred {
            required: pop_prefix_len,
            preferred: preferred_size,
        });
    }

    // Each configured level warns at most once, not once per POP
    for &level in levels {
        if level <= preferred_size {
            warnings.push(PlanWarning::LevelNotDeeper {
                level,
                preferred: preferred_size,
            });
        }
    }

    let mut pop_allocations = Vec::with_capacity(pop_count as usize);
    for pop_index in 0..pop_count {
        // The POP network only sets the top bits_needed bits beyond the
        // base; the block is announced at preferred_size with the padding
        // bits left zero. When the warning above fired the POP bits extend
        // past preferred_size, and they are carried through rather than
        // masked off so the blocks stay distinct.
        let pop_network = if bits_needed > 0 {
            base.derive_child(u128::from(pop_index), pop_prefix_len)
        } else {
            base
        };
        let pop_address = pop_network.address();

        let mut subnets = Vec::new();
        for (position, &level) in levels.iter().enumerate() {
            if level <= preferred_size {
                continue;
            }

            let count = available_subnets(preferred_size, level);
            // The representative is the zeroth child: the POP address
            // re-stamped at the level's length
            subnets.push(SubnetDetail {
                label: format!("Level {} (/{})", position + 1, level),
                cidr: format!("{}/{}", pop_address, level),
                count,
                available: count,
            });
        }

        let level_names = subnets.iter().map(|detail| detail.label.clone()).collect();
        pop_allocations.push(PopAllocation {
            pop_number: pop_index + 1,
            pop_subnet: format!("{}/{}", pop_address, preferred_size),
            subnets,
            level_names,
        });
    }

    let plan = Plan {
        base_subnet: base.to_string(),
        pop_count,
        preferred_size,
        subnet_levels: levels.to_vec(),
        pop_allocations,
        subnet_counts,
    };

    Ok((plan, warnings))
}
