//! Graph algorithm implementations
//!
//! Contains the pieces of the weighted shortest-path search:
//! - `frontier`: priority-ordered queue of tentative costs
//! - `dijkstra`: the relaxation loop and route reconstruction

pub mod dijkstra;
pub mod frontier;

pub use dijkstra::cheapest_route;
pub use frontier::{Frontier, FrontierEntry};
