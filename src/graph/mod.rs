// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph primitives and the two graph oracles the search relies on.
//!
//! - `Digraph`: containment and cover relations over flat indices
//! - `UndirectedGraph`: the per-level choice graph, with vertex labels
//! - `ColoredGraph`: the element/flat incidence graph handed to canonicalization
//! - `canonical`: the `CanonicalOracle` trait and a refinement-based implementation
//! - `independent`: the `IndependentSetOracle` trait and a backtracking implementation

pub mod canonical;
pub mod independent;

pub use canonical::{CanonicalOracle, RefinementCanonicalizer};
pub use independent::{BacktrackingIndependentSets, IndependentSetOracle};

/// A directed graph stored as sorted out-neighbor lists.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    out: Vec<Vec<usize>>,
}

impl Digraph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self { out: vec![Vec::new(); n] }
    }

    /// Add edge `from → to`. Edges must be added in ascending `to` order per vertex.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        debug_assert!(self.out[from].last().map_or(true, |&last| last < to));
        self.out[from].push(to);
    }

    /// Vertices `j` with an edge `i → j`, ascending.
    pub fn out_neighbors(&self, i: usize) -> &[usize] {
        &self.out[i]
    }

    /// True if the edge `from → to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.out[from].binary_search(&to).is_ok()
    }

    pub fn vertex_count(&self) -> usize {
        self.out.len()
    }

    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }
}

/// An undirected simple graph whose vertices carry an external label.
///
/// Vertex `v` of the graph stands for `labels[v]` (a flat index for the
/// choice graph), so oracles can work on a compact vertex range.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    labels: Vec<usize>,
    adjacency: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Create an edgeless graph with one vertex per label.
    pub fn with_labels(labels: Vec<usize>) -> Self {
        let adjacency = vec![Vec::new(); labels.len()];
        Self { labels, adjacency }
    }

    /// Add the edge `u – v`. Duplicate edges and loops are ignored.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u == v || self.has_edge(u, v) {
            return;
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(&v)
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// External label of vertex `v`.
    pub fn label(&self, v: usize) -> usize {
        self.labels[v]
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// An undirected graph with a color on every vertex.
///
/// Colors are compared by value; canonical labelings place lower colors first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredGraph {
    colors: Vec<u64>,
    adjacency: Vec<Vec<usize>>,
}

impl ColoredGraph {
    /// Create an edgeless graph with the given vertex colors.
    pub fn new(colors: Vec<u64>) -> Self {
        let adjacency = vec![Vec::new(); colors.len()];
        Self { colors, adjacency }
    }

    /// Add the edge `u – v`. The caller must not add an edge twice.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
    }

    pub fn color(&self, v: usize) -> u64 {
        self.colors[v]
    }

    pub fn colors(&self) -> &[u64] {
        &self.colors
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// Sorted edge list `(min, max)` after moving every vertex `v` to `label[v]`.
    pub fn relabeled_edges(&self, label: &[usize]) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
            .map(|(u, v)| {
                let (a, b) = (label[u], label[v]);
                (a.min(b), a.max(b))
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraph_edges() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        assert_eq!(g.out_neighbors(0), &[1, 2]);
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_undirected_graph_ignores_duplicates() {
        let mut g = UndirectedGraph::with_labels(vec![10, 20, 30]);
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        g.add_edge(2, 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge(1, 0));
        assert_eq!(g.label(2), 30);
    }

    #[test]
    fn test_relabeled_edges_sorted() {
        let mut g = ColoredGraph::new(vec![0, 0, 1]);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        // Swap vertices 0 and 2.
        assert_eq!(g.relabeled_edges(&[2, 1, 0]), vec![(0, 1), (0, 2)]);
    }
}
