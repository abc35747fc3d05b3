// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Containment and cover relations over flat indices.
//!
//! Both relations are directed graphs on the flat array indices, built once
//! per polymatroid on first use:
//!
//! - containment: edge i → j iff flat i is a proper subset of flat j
//! - cover: edge i → j iff flat j covers flat i (no flat strictly between)

use crate::graph::Digraph;
use crate::lattice::Polymatroid;

impl Polymatroid {
    /// The containment relation (i → j iff flat i ⊊ flat j).
    pub fn containment(&self) -> &Digraph {
        self.containment.get_or_init(|| {
            let flats = self.flats();
            let mut graph = Digraph::new(flats.len());
            for (i, f) in flats.iter().enumerate() {
                for (j, g) in flats.iter().enumerate() {
                    if f.mask.is_proper_subset_of(g.mask) {
                        graph.add_edge(i, j);
                    }
                }
            }
            graph
        })
    }

    /// The cover relation, derived from containment.
    ///
    /// Edge i → j is kept unless another flat k above i is itself contained in j.
    pub fn covers(&self) -> &Digraph {
        self.covers.get_or_init(|| {
            let containment = self.containment();
            let mut graph = Digraph::new(containment.vertex_count());
            for i in 0..containment.vertex_count() {
                let above = containment.out_neighbors(i);
                for &j in above {
                    let upper = self.mask(j);
                    let covered = above
                        .iter()
                        .all(|&k| k == j || !self.mask(k).is_subset_of(upper));
                    if covered {
                        graph.add_edge(i, j);
                    }
                }
            }
            graph
        })
    }
}
