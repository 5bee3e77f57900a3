//! Shared models for sweepr.
//!
//! Everything here is plain data: the tool catalog, the target and
//! selection types the CLI parses, and the result table the report is
//! rendered from. No IO happens in this crate.

pub mod config;
pub mod registry;
pub mod result;
pub mod selection;
pub mod target;

mod macros;
