//! Graph model and path-finding operations
//!
//! Provides the pieces of minimum-cost routing:
//! - Adjacency-map graph with non-negative edge costs
//! - Graph provider trait for pluggable adjacency sources
//! - Priority-ordered frontier queue
//! - Dijkstra shortest-path search with early destination exit

pub mod adjacency;
pub mod algos;
pub mod provider;
pub mod types;

pub use adjacency::{Graph, Node};
pub use algos::{cheapest_route, Frontier, FrontierEntry};
pub use provider::GraphProvider;
pub use types::{Edge, EdgeCost, Route};
