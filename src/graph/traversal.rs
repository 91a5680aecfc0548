//! Breadth-first and depth-first visit orders.

use super::{Graph, VertexIndex};
use crate::error::Result;
use std::collections::VecDeque;

/// Vertices reachable from `start`, in breadth-first order.
pub fn breadth_first_order<V: Ord + Clone>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    let idx = VertexIndex::new(graph);
    let s = idx.require(start)?;
    let adj = idx.adjacency(graph);
    let mut seen = vec![false; idx.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([s]);
    seen[s] = true;
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &(v, _) in &adj[u] {
            if !seen[v] {
                seen[v] = true;
                queue.push_back(v);
            }
        }
    }
    Ok(idx.labels(&order))
}

/// Vertices reachable from `start`, in depth-first preorder.
pub fn depth_first_order<V: Ord + Clone>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    let idx = VertexIndex::new(graph);
    let s = idx.require(start)?;
    let adj = idx.adjacency(graph);
    let mut seen = vec![false; idx.len()];
    let mut order = Vec::new();
    let mut stack = vec![s];
    while let Some(u) = stack.pop() {
        if seen[u] {
            continue;
        }
        seen[u] = true;
        order.push(u);
        // reversed so the smallest neighbour is visited first
        for &(v, _) in adj[u].iter().rev() {
            if !seen[v] {
                stack.push(v);
            }
        }
    }
    Ok(idx.labels(&order))
}
