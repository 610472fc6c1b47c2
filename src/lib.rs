//! # IPv6 Planner - Hierarchical IPv6 address plan generator
//!
//! This library computes a deterministic, hierarchical IPv6 address
//! allocation plan: a base prefix is carved into per-POP blocks, and each
//! POP block is sampled at a configurable set of nested subnet levels with
//! exact capacity figures.
//!
//! ## Overview
//!
//! Given a base network prefix, a number of POPs (points of presence), a
//! preferred per-POP prefix length, and a list of subnet levels, the
//! planner reports how many subnets exist at every level and materializes
//! one representative subnet per level per POP. It is a capacity planner,
//! not a stateful IPAM system - nothing is persisted and no allocation is
//! tracked across runs.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `prefix`: 128-bit network prefix arithmetic - CIDR parsing, subnet
//!   counting, child derivation
//! - `plan`: plan generation - global counts, POP allocation blocks,
//!   advisory warnings
//! - `input`: validated inputs - level-list parsing and interactive prompts
//! - `render`: text, JSON, and HTML report generation
//!
//! Plan generation is a pure function of its inputs: warnings come back as
//! values next to the plan, and all I/O stays in the binary.
//!
//! ## Example Usage
//!
//! ```rust
//! use ipv6planner::plan::build_plan;
//! use ipv6planner::prefix::NetworkPrefix;
//!
//! let base: NetworkPrefix = "3fff:db8::/32".parse()?;
//! let (plan, warnings) = build_plan(base, 5, 40, &[48, 52, 56, 64])?;
//!
//! assert!(warnings.is_empty());
//! assert_eq!(plan.pop_allocations[0].pop_subnet, "3fff:db8::/40");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod input;
pub mod plan;
pub mod prefix;
pub mod render;

// Re-export commonly used types
pub use plan::{build_plan, Plan, PlanWarning, PopAllocation, SubnetCount, SubnetDetail, ValidationError};
pub use prefix::{available_subnets, NetworkPrefix, ParseError};
