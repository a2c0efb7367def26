use serde::Serialize;

/// Represents the cost of traversing a single edge, or a sum of such
/// costs accumulated along a route.
///
/// Costs are expected to be non-negative; `Graph::add_edge` enforces
/// this and the search re-checks edges handed back by a provider.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct EdgeCost(f32);

impl EdgeCost {
    pub const ZERO: EdgeCost = EdgeCost(0.0);

    pub fn new(cost: f32) -> Self {
        EdgeCost(cost)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Total ordering for heap use (NaN sorts after all numbers)
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for EdgeCost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        EdgeCost(self.0 + other.0)
    }
}

impl From<u32> for EdgeCost {
    fn from(cost: u32) -> Self {
        EdgeCost(cost as f32)
    }
}

/// A directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub cost: EdgeCost,
}

/// A minimum-cost route between two nodes.
///
/// `nodes` runs from the start node to the destination, inclusive;
/// `total_cost` is the finalized cost of the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub nodes: Vec<String>,
    pub total_cost: EdgeCost,
    pub hop_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_cost_zero() {
        let cost = EdgeCost::ZERO;
        assert_eq!(cost.value(), 0.0);
        assert!(!cost.is_negative());
    }

    #[test]
    fn test_edge_cost_from_u32() {
        let cost = EdgeCost::from(5);
        assert_eq!(cost.value(), 5.0);
    }

    #[test]
    fn test_edge_cost_addition() {
        let cost1 = EdgeCost::from(2);
        let cost2 = EdgeCost::from(3);
        let sum = cost1 + cost2;
        assert_eq!(sum.value(), 5.0);
    }

    #[test]
    fn test_edge_cost_fractional() {
        let cost1 = EdgeCost::new(1.5);
        let cost2 = EdgeCost::new(2.5);
        let sum = cost1 + cost2;
        assert_eq!(sum.value(), 4.0);
    }

    #[test]
    fn test_edge_cost_negative() {
        let cost = EdgeCost::new(-0.5);
        assert!(cost.is_negative());
    }

    #[test]
    fn test_edge_cost_total_cmp() {
        let low = EdgeCost::new(1.0);
        let high = EdgeCost::new(2.0);
        assert_eq!(low.total_cmp(&high), std::cmp::Ordering::Less);
        assert_eq!(high.total_cmp(&low), std::cmp::Ordering::Greater);
        assert_eq!(low.total_cmp(&low), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_edge_cost_serializes_as_number() {
        let json = serde_json::to_value(EdgeCost::new(2.5)).unwrap();
        assert_eq!(json, serde_json::json!(2.5));
    }

    #[test]
    fn test_route_serialization_shape() {
        let route = Route {
            from: "A".to_string(),
            to: "C".to_string(),
            nodes: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            total_cost: EdgeCost::from(3),
            hop_count: 2,
        };

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["from"], "A");
        assert_eq!(json["to"], "C");
        assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(json["total_cost"], serde_json::json!(3.0));
        assert_eq!(json["hop_count"], 2);
    }
}
