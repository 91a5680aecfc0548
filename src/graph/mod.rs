//! Weighted-graph algorithms over adjacency maps.
//!
//! A [`Graph`] maps each vertex to its neighbours and the non-negative weight
//! of the connecting edge. Undirected graphs must be encoded symmetrically by
//! the caller; this is not validated. Ordered maps keep every traversal
//! deterministic: ties are always resolved toward the smaller vertex.
//!
//! Internally each algorithm relabels vertices to dense indices
//! (see [`VertexIndex`]) and works on adjacency vectors.

use crate::error::{NError, Result};
use std::collections::BTreeMap;

pub mod euler;
pub mod hamilton;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use euler::eulerian_circuit;
pub use hamilton::hamiltonian_path;
pub use shortest_path::shortest_path_dijkstra;
pub use spanning_tree::{UnionFind, minimum_spanning_tree_kruskal};
pub use traversal::{breadth_first_order, depth_first_order};

/// Vertex → (neighbour → edge weight).
pub type Graph<V> = BTreeMap<V, BTreeMap<V, f64>>;

/// Dense relabelling of every vertex that appears as a key or a neighbour.
pub(crate) struct VertexIndex<V> {
    pub vertices: Vec<V>,
    index: BTreeMap<V, usize>,
}

impl<V: Ord + Clone> VertexIndex<V> {
    pub fn new(graph: &Graph<V>) -> Self {
        let mut index = BTreeMap::new();
        for (u, nbrs) in graph {
            index.entry(u.clone()).or_insert(0);
            for v in nbrs.keys() {
                index.entry(v.clone()).or_insert(0);
            }
        }
        let vertices: Vec<V> = index.keys().cloned().collect();
        for (i, slot) in index.values_mut().enumerate() {
            *slot = i;
        }
        Self { vertices, index }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn get(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Index of `v`, or `InvalidArgument` if the graph does not mention it.
    pub fn require(&self, v: &V) -> Result<usize> {
        self.get(v)
            .ok_or_else(|| NError::InvalidArgument("vertex is not in the graph".into()))
    }

    /// Outgoing adjacency as `(neighbour index, weight)`, in vertex order.
    pub fn adjacency(&self, graph: &Graph<V>) -> Vec<Vec<(usize, f64)>> {
        let mut adj = vec![Vec::new(); self.len()];
        for (u, nbrs) in graph {
            let ui = self.index[u];
            adj[ui] = nbrs.iter().map(|(v, &w)| (self.index[v], w)).collect();
        }
        adj
    }

    pub fn labels(&self, path: &[usize]) -> Vec<V> {
        path.iter().map(|&i| self.vertices[i].clone()).collect()
    }
}

/// Build a symmetric graph from undirected weighted edges.
pub fn undirected<V: Ord + Clone>(edges: &[(V, V, f64)]) -> Graph<V> {
    let mut g = Graph::new();
    for (u, v, w) in edges {
        g.entry(u.clone()).or_insert_with(BTreeMap::new).insert(v.clone(), *w);
        g.entry(v.clone()).or_insert_with(BTreeMap::new).insert(u.clone(), *w);
    }
    g
}
