//! Single-source shortest path (Dijkstra, binary heap).
//!
//! Weights are assumed non-negative; negative weights are not detected and
//! give unspecified results.

use super::{Graph, VertexIndex};
use crate::error::{NError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on cost, then on node for determinism
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `end` and its total weight.
///
/// Fails with `InvalidArgument` if either endpoint is absent from the graph and
/// with `NoPath` if `end` is unreachable.
pub fn shortest_path_dijkstra<V: Ord + Clone>(graph: &Graph<V>, start: &V, end: &V) -> Result<(Vec<V>, f64)> {
    let idx = VertexIndex::new(graph);
    let source = idx.require(start)?;
    let target = idx.require(end)?;
    let adj = idx.adjacency(graph);

    let n = idx.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();
    dist[source] = 0.0;
    heap.push(State { cost: 0.0, node: source });

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }
        if cost > dist[node] {
            continue;
        }
        for &(next, w) in &adj[node] {
            let next_cost = cost + w;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                pred[next] = Some(node);
                heap.push(State { cost: next_cost, node: next });
            }
        }
    }

    if dist[target].is_infinite() {
        return Err(NError::NoPath);
    }
    let mut path = vec![target];
    let mut cur = target;
    while let Some(p) = pred[cur] {
        path.push(p);
        cur = p;
    }
    path.reverse();
    Ok((idx.labels(&path), dist[target]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::undirected;

    #[test]
    fn prefers_cheaper_detour() {
        let g = undirected(&[(0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0)]);
        let (path, d) = shortest_path_dijkstra(&g, &0, &1).unwrap();
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(d, 3.0);
    }

    #[test]
    fn trivial_and_unreachable() {
        let mut g = undirected(&[(0, 1, 1.0)]);
        g.entry(7).or_default();
        assert_eq!(shortest_path_dijkstra(&g, &0, &0).unwrap(), (vec![0], 0.0));
        assert_eq!(shortest_path_dijkstra(&g, &0, &7).err(), Some(NError::NoPath));
        assert!(matches!(shortest_path_dijkstra(&g, &0, &9), Err(NError::InvalidArgument(_))));
    }

    #[test]
    fn directed_edges_are_respected() {
        let mut g: Graph<char> = Graph::new();
        g.entry('a').or_default().insert('b', 1.0);
        g.entry('b').or_default();
        assert!(shortest_path_dijkstra(&g, &'a', &'b').is_ok());
        assert_eq!(shortest_path_dijkstra(&g, &'b', &'a').err(), Some(NError::NoPath));
    }
}
