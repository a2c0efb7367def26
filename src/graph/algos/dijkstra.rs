//! Weighted shortest-path search between two nodes
//!
//! Implements Dijkstra's algorithm over a `GraphProvider`: a
//! priority-ordered frontier of tentative costs, a visited set that
//! finalizes each node at most once, and a predecessor table walked
//! backward to reconstruct the route. Stale frontier entries left by
//! repeated cost improvements are discarded at extraction time instead
//! of being updated in place.
//!
//! Edge costs must be non-negative; the relaxation loop rejects any
//! negative cost a provider hands back.

use crate::error::{MinrouteError, Result};
use crate::graph::algos::frontier::{Frontier, FrontierEntry};
use crate::graph::provider::GraphProvider;
use crate::graph::types::{EdgeCost, Route};
use std::collections::{HashMap, HashSet};

/// State tracked during a single search, dropped when the search returns
struct SearchState {
    costs: HashMap<String, EdgeCost>,
    predecessors: HashMap<String, String>,
    visited: HashSet<String>,
    frontier: Frontier,
}

impl SearchState {
    fn new() -> Self {
        Self {
            costs: HashMap::new(),
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            frontier: Frontier::new(),
        }
    }
}

/// Relax the outgoing edges of a freshly finalized node, recording
/// improved costs and re-inserting neighbors into the frontier
fn relax_neighbors(
    state: &mut SearchState,
    provider: &dyn GraphProvider,
    current_id: &str,
    accumulated: EdgeCost,
) -> Result<()> {
    for edge in provider.outgoing_edges(current_id) {
        if state.visited.contains(&edge.to) {
            continue;
        }
        if edge.cost.is_negative() {
            return Err(MinrouteError::NegativeCost {
                from: edge.from,
                to: edge.to,
                cost: edge.cost.value(),
            });
        }

        let candidate = accumulated + edge.cost;
        let improves = match state.costs.get(&edge.to) {
            Some(existing) => candidate.value() < existing.value(),
            None => true,
        };

        if improves {
            state.costs.insert(edge.to.clone(), candidate);
            state
                .predecessors
                .insert(edge.to.clone(), current_id.to_string());
            state.frontier.enqueue(edge.to, candidate);
        }
    }

    Ok(())
}

/// Walk the predecessor table backward from the destination and reverse
fn reconstruct_route(from: &str, to: &str, state: &SearchState) -> Result<Route> {
    let total_cost = match state.costs.get(to) {
        Some(&cost) => cost,
        None => {
            return Err(MinrouteError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    };

    let mut nodes = vec![to.to_string()];
    let mut current = to;

    while current != from {
        match state.predecessors.get(current) {
            Some(pred) => {
                nodes.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    nodes.reverse();

    // The walk must have arrived back at the start
    if nodes.first().map(String::as_str) != Some(from) {
        return Err(MinrouteError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let hop_count = nodes.len() - 1;
    Ok(Route {
        from: from.to_string(),
        to: to.to_string(),
        nodes,
        total_cost,
        hop_count,
    })
}

/// Compute the minimum-cost route from `from` to `to`.
///
/// The frontier is seeded with the start node at cost zero; the loop
/// repeatedly finalizes the cheapest unvisited node and relaxes its
/// outgoing edges. The first time the destination is extracted its cost
/// is final and the search stops. Fails with `Unreachable` when the
/// frontier drains without finalizing the destination and with
/// `UnknownNode` when either endpoint is missing from the graph.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn cheapest_route(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<Route> {
    if !provider.contains(from) {
        return Err(MinrouteError::UnknownNode(from.to_string()));
    }
    if !provider.contains(to) {
        return Err(MinrouteError::UnknownNode(to.to_string()));
    }

    let mut state = SearchState::new();
    state.costs.insert(from.to_string(), EdgeCost::ZERO);
    state.frontier.enqueue(from, EdgeCost::ZERO);

    while let Some(FrontierEntry { node_id, cost }) = state.frontier.dequeue() {
        // A cheaper copy of this node was finalized earlier
        if state.visited.contains(&node_id) {
            continue;
        }
        state.visited.insert(node_id.clone());

        // Cost to the destination is final once it is extracted
        if node_id == to {
            break;
        }

        relax_neighbors(&mut state, provider, &node_id, cost)?;
    }

    if !state.visited.contains(to) {
        return Err(MinrouteError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    reconstruct_route(from, to, &state)
}
