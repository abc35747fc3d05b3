// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Closure of an arbitrary mask in the flat lattice.

use crate::lattice::{FlatSet, Polymatroid};

impl Polymatroid {
    /// The smallest flat containing `mask`: the intersection of every flat
    /// that is a superset of it.
    ///
    /// Returns `mask` unchanged if it is already a flat. Results for other
    /// masks are memoized per instance.
    ///
    /// # Panics
    ///
    /// Panics if no flat contains `mask`, which cannot happen for a validated
    /// instance since the ground set is a flat.
    pub fn closure(&self, mask: FlatSet) -> FlatSet {
        if self.is_flat(mask) {
            return mask;
        }
        if let Some(&closed) = self.closure_memo.borrow().get(&mask) {
            return closed;
        }

        let closed = self
            .flat_table()
            .keys()
            .filter(|f| mask.is_subset_of(**f))
            .fold(None, |acc: Option<FlatSet>, &f| Some(acc.map_or(f, |a| a & f)));
        let closed = match closed {
            Some(c) => c,
            None => panic!("Invariant failure: no flat contains {}", mask),
        };

        self.closure_memo.borrow_mut().insert(mask, closed);
        closed
    }

    /// Array index of the closure of flat i ∪ flat j.
    pub fn join(&self, i: usize, j: usize) -> usize {
        self.lookup(self.closure(self.mask(i) | self.mask(j)))
    }

    /// Array index of flat i ∩ flat j.
    pub fn meet(&self, i: usize, j: usize) -> usize {
        self.lookup(self.mask(i) & self.mask(j))
    }
}
