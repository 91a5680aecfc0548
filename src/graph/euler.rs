//! Eulerian circuits by Hierholzer's algorithm.
//!
//! The graph is read as undirected: each `u–v` pair is one edge however many
//! directions the caller stored. Edges are consumed from a private working
//! copy using an explicit stack.

use super::{Graph, VertexIndex};
use crate::error::{NError, Result};
use std::collections::BTreeSet;

/// Closed walk using every edge exactly once.
///
/// Fails with `OddDegree` if any vertex has odd degree and with
/// `Disconnected` if the edges do not all lie in one component. A graph with
/// no edges yields the single-vertex circuit at its smallest vertex.
pub fn eulerian_circuit<V: Ord + Clone>(graph: &Graph<V>) -> Result<Vec<V>> {
    let idx = VertexIndex::new(graph);
    let n = idx.len();
    if n == 0 {
        return Err(NError::EmptyInput("graph"));
    }

    let mut pairs = BTreeSet::new();
    for (u, nbrs) in idx.adjacency(graph).iter().enumerate() {
        for &(v, _) in nbrs {
            pairs.insert((u.min(v), u.max(v)));
        }
    }
    let edges: Vec<(usize, usize)> = pairs.into_iter().collect();

    let mut degree = vec![0usize; n];
    let mut incident: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (id, &(u, v)) in edges.iter().enumerate() {
        degree[u] += 1;
        degree[v] += 1; // a self-loop counts twice
        incident[u].push((v, id));
        if u != v {
            incident[v].push((u, id));
        }
    }
    if degree.iter().any(|d| d % 2 == 1) {
        return Err(NError::OddDegree);
    }
    let Some(start) = degree.iter().position(|&d| d > 0) else {
        return Ok(idx.labels(&[0]));
    };

    let mut used = vec![false; edges.len()];
    let mut next_edge = vec![0usize; n];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(edges.len() + 1);
    while let Some(&v) = stack.last() {
        while next_edge[v] < incident[v].len() && used[incident[v][next_edge[v]].1] {
            next_edge[v] += 1;
        }
        if let Some(&(w, id)) = incident[v].get(next_edge[v]) {
            used[id] = true;
            stack.push(w);
        } else {
            circuit.push(v);
            stack.pop();
        }
    }
    if circuit.len() != edges.len() + 1 {
        return Err(NError::Disconnected);
    }
    circuit.reverse();
    Ok(idx.labels(&circuit))
}
