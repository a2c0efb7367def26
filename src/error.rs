//! Error types for minroute operations

use thiserror::Error;

/// Errors that can occur while building a graph or searching it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MinrouteError {
    /// The destination was never finalized: the frontier drained without
    /// reaching it, so no path exists.
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Dijkstra's correctness requires non-negative edge costs.
    #[error("negative cost {cost} on edge {from} -> {to}")]
    NegativeCost {
        from: String,
        to: String,
        cost: f32,
    },
}

impl MinrouteError {
    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MinrouteError::Unreachable { .. } => "unreachable",
            MinrouteError::UnknownNode(_) => "unknown_node",
            MinrouteError::NegativeCost { .. } => "negative_cost",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for minroute operations
pub type Result<T> = std::result::Result<T, MinrouteError>;
