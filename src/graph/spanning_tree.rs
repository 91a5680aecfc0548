//! Kruskal's minimum spanning tree with a disjoint-set forest.

use super::{Graph, VertexIndex};

/// Disjoint-set forest with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// `n` singleton sets `{0}, …, {n-1}`.
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), rank: vec![0; n] }
    }

    /// Representative of the set holding `x`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let next = self.parent[x];
            self.parent[x] = self.parent[next]; // path halving
            x = next;
        }
        x
    }

    /// Merge the sets of `x` and `y`; false if they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }
}

/// Edges `(u, v, w)` of a minimum spanning forest, in the order accepted.
///
/// Each undirected edge is considered once; if the two directions disagree on
/// the weight, the smaller one is used. Self-loops are ignored. A
/// disconnected graph yields one tree per component.
pub fn minimum_spanning_tree_kruskal<V: Ord + Clone>(graph: &Graph<V>) -> Vec<(V, V, f64)> {
    let idx = VertexIndex::new(graph);
    let mut edges: Vec<(usize, usize, f64)> = Vec::new();
    for (u, nbrs) in idx.adjacency(graph).iter().enumerate() {
        for &(v, w) in nbrs {
            if u != v {
                edges.push((u.min(v), u.max(v), w));
            }
        }
    }
    // stable sort keeps vertex order among equal weights
    edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)).then(a.2.total_cmp(&b.2)));
    edges.dedup_by(|later, first| later.0 == first.0 && later.1 == first.1);
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut sets = UnionFind::new(idx.len());
    let mut tree = Vec::with_capacity(idx.len().saturating_sub(1));
    for (u, v, w) in edges {
        if sets.union(u, v) {
            tree.push((idx.vertices[u].clone(), idx.vertices[v].clone(), w));
        }
    }
    tree
}
