use crate::graph::adjacency::Graph;
use crate::graph::types::Edge;

/// Trait for providing graph adjacency
///
/// The search engine only sees this trait, so callers may route it over
/// any structure that can enumerate outgoing edges by node identifier.
pub trait GraphProvider {
    fn outgoing_edges(&self, id: &str) -> Vec<Edge>;
    fn contains(&self, id: &str) -> bool;
}

impl GraphProvider for Graph {
    fn outgoing_edges(&self, id: &str) -> Vec<Edge> {
        self.node(id)
            .map(|node| {
                node.outgoing()
                    .map(|(to, cost)| Edge {
                        from: id.to_string(),
                        to: to.clone(),
                        cost: *cost,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn contains(&self, id: &str) -> bool {
        self.contains(id)
    }
}
