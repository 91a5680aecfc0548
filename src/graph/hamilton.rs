//! Hamiltonian path search by depth-first backtracking.
//!
//! The search starts from the smallest vertex and tries neighbours in order,
//! so the path returned is the lexicographically first one from that start,
//! not a shortest one. Worst case is exponential, hence the vertex cap.
//! Backtracking uses an explicit stack, so stack depth does not grow with the
//! graph.

use super::{Graph, VertexIndex};
use crate::config::constants::MAX_HAMILTONIAN_VERTICES;
use crate::error::{NError, Result};

/// A path visiting every vertex exactly once, starting at the smallest vertex.
pub fn hamiltonian_path<V: Ord + Clone>(graph: &Graph<V>) -> Result<Vec<V>> {
    let idx = VertexIndex::new(graph);
    let n = idx.len();
    if n == 0 {
        return Err(NError::EmptyInput("graph"));
    }
    if n > MAX_HAMILTONIAN_VERTICES {
        return Err(NError::InvalidArgument(format!(
            "Hamiltonian search is limited to {MAX_HAMILTONIAN_VERTICES} vertices, got {n}"
        )));
    }
    let adj = idx.adjacency(graph);

    let mut visited = vec![false; n];
    let mut path = vec![0usize];
    // cursor[d] = next neighbour position to try from path[d]
    let mut cursor = vec![0usize];
    visited[0] = true;

    while let Some(&top) = path.last() {
        if path.len() == n {
            return Ok(idx.labels(&path));
        }
        let depth = path.len() - 1;
        match adj[top].get(cursor[depth]) {
            Some(&(next, _)) => {
                cursor[depth] += 1;
                if !visited[next] {
                    visited[next] = true;
                    path.push(next);
                    cursor.push(0);
                }
            }
            None => {
                visited[top] = false;
                path.pop();
                cursor.pop();
            }
        }
    }
    Err(NError::NoHamiltonianPath)
}
