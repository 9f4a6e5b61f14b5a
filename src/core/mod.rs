//! Core module - Building blocks shared by the store and the flows
//!
//! This module provides:
//! - Run configuration (paths, snapshot prefix)
//! - Word tokenizer and frequency counter
//! - Snapshot naming and path resolution
//! - JSON file helpers

pub mod config;
pub mod counter;
pub mod paths;
pub mod tokenizer;
pub mod util;
