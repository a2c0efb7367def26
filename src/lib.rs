//! Minroute
//!
//! Minimum-cost route finding over weighted, directed graphs.

pub mod error;
pub mod graph;
pub mod logging;
