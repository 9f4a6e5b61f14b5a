//! Flows module - The steps of a tally run
//!
//! Provides:
//! - Accumulation of new counts onto the latest snapshot
//! - The frequency-sorted main index
//! - The end-to-end tally pipeline

pub mod accumulate;
pub mod index;
pub mod tally;
