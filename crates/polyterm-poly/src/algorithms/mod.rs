//! Term-list algorithms.
//!
//! This module contains:
//! - Descending merge with like-term collapsing (the core of addition)
//! - Geobucket-based sparse multiplication

pub mod geobucket;
pub mod merge;
