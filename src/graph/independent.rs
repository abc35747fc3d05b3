// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of independent vertex sets.

use super::UndirectedGraph;
use std::fmt::Debug;

/// A source of independent sets.
///
/// `independent_sets` returns every non-empty vertex set of `graph` with no
/// internal edge, each sorted ascending. The empty set is left to the caller.
pub trait IndependentSetOracle: Debug {
    fn independent_sets(&self, graph: &UndirectedGraph) -> Vec<Vec<usize>>;
}

/// Depth-first enumeration: each set is extended only by vertices larger than
/// its last member, so every independent set appears exactly once, in
/// lexicographic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingIndependentSets;

impl BacktrackingIndependentSets {
    pub fn new() -> Self {
        Self
    }
}

impl IndependentSetOracle for BacktrackingIndependentSets {
    fn independent_sets(&self, graph: &UndirectedGraph) -> Vec<Vec<usize>> {
        let n = graph.vertex_count();
        let mut results = Vec::new();
        // Explicit stack of (current set, next candidate vertex).
        let mut stack: Vec<(Vec<usize>, usize)> = vec![(Vec::new(), 0)];

        while let Some((set, next)) = stack.pop() {
            // Candidates are pushed in reverse so the smallest is explored first.
            for v in (next..n).rev() {
                if set.iter().all(|&u| !graph.has_edge(u, v)) {
                    let mut extended = set.clone();
                    extended.push(v);
                    stack.push((extended, v + 1));
                }
            }
            if !set.is_empty() {
                results.push(set);
            }
        }
        results
    }
}
