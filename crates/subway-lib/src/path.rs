use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Edge, Graph, StationId};
use crate::section::Distance;

/// Raw search result expressed in graph ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    /// Stations from start to goal, inclusive.
    pub nodes: Vec<StationId>,
    /// Edge taken to reach each node after the first.
    pub edges: Vec<Edge>,
    /// Sum of the traversed edge distances.
    pub weight: Distance,
}

/// Run Dijkstra's algorithm from `start` to `goal`.
///
/// Returns `None` when `goal` is unreachable or either id is out of range.
/// Ties between equal-cost paths are resolved by the heap order (cost, then
/// station id) and by keeping the first relaxation that reached a station, so
/// the result only depends on the graph's construction order.
pub fn shortest_path(graph: &Graph, start: StationId, goal: StationId) -> Option<SearchPath> {
    let count = graph.station_count();
    if start >= count || goal >= count {
        return None;
    }
    if start == goal {
        return Some(SearchPath {
            nodes: vec![start],
            edges: Vec::new(),
            weight: 0,
        });
    }

    let mut distances: Vec<Option<Distance>> = vec![None; count];
    let mut parents: Vec<Option<(StationId, Edge)>> = vec![None; count];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if matches!(distances[entry.node], Some(best) if best < entry.cost) {
            continue;
        }

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal, entry.cost));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let Some(next_cost) = entry.cost.checked_add(edge.distance) else {
                continue;
            };
            let improves = distances[next].map_or(true, |known| next_cost < known);
            if improves {
                distances[next] = Some(next_cost);
                parents[next] = Some((entry.node, *edge));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &[Option<(StationId, Edge)>],
    start: StationId,
    goal: StationId,
    weight: Distance,
) -> SearchPath {
    let mut nodes = vec![goal];
    let mut edges = Vec::new();
    let mut current = goal;
    while current != start {
        let Some((previous, edge)) = parents[current] else {
            break;
        };
        edges.push(edge);
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();
    edges.reverse();
    SearchPath {
        nodes,
        edges,
        weight,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: StationId,
    cost: Distance,
}

impl QueueEntry {
    fn new(node: StationId, cost: Distance) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
