// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical labeling through the element/flat incidence graph.
//!
//! A polymatroid with n elements and m flats becomes a bipartite colored
//! graph on n + m vertices:
//! - vertex j, color 0, for each ground element j
//! - vertex n + i, color rank_i + 1, for flat i of the flat array
//! - an edge j – (n + i) whenever element j belongs to flat i
//!
//! Only the first n entries of the oracle's labeling are used. They move each
//! element to its canonical position, and every flat mask moves with them.

use crate::graph::{CanonicalOracle, ColoredGraph};
use crate::lattice::{FlatSet, Polymatroid, Rank};
use std::collections::HashMap;

/// Build the colored incidence graph of `p`.
pub fn incidence_graph(p: &Polymatroid) -> ColoredGraph {
    let n = p.ground_size();
    let mut colors = vec![0u64; n];
    colors.extend(p.flats().iter().map(|f| (f.rank + 1) as u64));

    let mut graph = ColoredGraph::new(colors);
    for (i, flat) in p.flats().iter().enumerate() {
        for j in flat.mask.iter() {
            graph.add_edge(j, n + i);
        }
    }
    graph
}

/// A canonically labeled copy of `p`.
///
/// Polymatroids that differ only by a permutation of the ground set produce
/// equal results, and labeling a canonical polymatroid returns it unchanged.
pub fn canonical_label(p: &Polymatroid, oracle: &dyn CanonicalOracle) -> Polymatroid {
    let n = p.ground_size();
    let labeling = oracle.canonical_labeling(&incidence_graph(p));
    let elements = &labeling[..n];
    debug_assert!(elements.iter().all(|&l| l < n), "element vertices must be labeled first");

    let flats: HashMap<FlatSet, Rank> = p
        .flat_table()
        .iter()
        .map(|(&mask, &rank)| (mask.relabel(elements), rank))
        .collect();
    Polymatroid::with_ground_size(n, flats)
}

/// Delete element n − 1 and canonically label the result.
///
/// A flat f ∪ {n − 1} whose reduction f is already a flat is dropped, so the
/// rank of f (the lower one) is kept.
///
/// # Panics
///
/// Panics if `p` has an empty ground set.
pub fn canonical_deletion(p: &Polymatroid, oracle: &dyn CanonicalOracle) -> Polymatroid {
    let n = p.ground_size();
    if n == 0 {
        panic!("Invariant failure: cannot delete an element from an empty ground set");
    }
    let last = n - 1;

    let mut flats: HashMap<FlatSet, Rank> = HashMap::with_capacity(p.num_flats());
    for (&mask, &rank) in p.flat_table() {
        if !mask.contains(last) {
            flats.insert(mask, rank);
            continue;
        }
        let reduced = mask.without(last);
        if !p.is_flat(reduced) {
            flats.insert(reduced, rank);
        }
    }
    canonical_label(&Polymatroid::with_ground_size(last, flats), oracle)
}
