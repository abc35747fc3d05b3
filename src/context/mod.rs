// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the fixed lattice and the mutable search state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - the polymatroid being extended, with its memo tables (shared, read-only)
//! - the trail and the modular cut under construction (owned, mutable)
//! - statistics for the current record
//!
//! The polymatroid is borrowed, so several contexts may search one instance.
//! Its memo tables use interior mutability and are not `Sync`, so contexts
//! sharing an instance stay on one thread.

use crate::lattice::{Level, Polymatroid};
use crate::state::{ModularCut, Statistics};
use crate::trail::Trail;

/// Search context for extending one polymatroid.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: &Polymatroid,   // Immutable, shared
///     trail: Trail,         // Mutable, owned
///     state: ModularCut,    // Mutable, owned
/// }
/// ```
///
/// Every level assignment goes through `assign`, which records the previous
/// value on the trail, so `rewind_to` can restore any earlier checkpoint.
#[derive(Debug)]
pub struct SearchContext<'p> {
    pub memo: &'p Polymatroid,
    pub trail: Trail,
    pub state: ModularCut,
    pub statistics: Statistics,
}

impl<'p> SearchContext<'p> {
    /// A context with every flat of `memo` unassigned.
    pub fn new(memo: &'p Polymatroid) -> Self {
        Self {
            memo,
            trail: Trail::new(),
            state: ModularCut::new(memo.num_flats()),
            statistics: Statistics::new(),
        }
    }

    /// Level of flat i, if assigned.
    pub fn level(&self, i: usize) -> Option<Level> {
        self.state.get(i)
    }

    /// Level of a flat the caller knows to be assigned.
    ///
    /// # Panics
    ///
    /// Panics if flat i has no level: assigned flats are kept up-closed, so
    /// this only happens if that invariant was broken.
    pub fn assigned_level(&self, i: usize) -> Level {
        match self.state.get(i) {
            Some(level) => level,
            None => panic!(
                "Invariant failure: flat {} ({}) has no level",
                i,
                self.memo.mask(i)
            ),
        }
    }

    /// Give flat i the level `c` if it has none. Returns true if it changed.
    pub fn assign(&mut self, i: usize, c: Level) -> bool {
        if self.state.is_assigned(i) {
            return false;
        }
        self.trail.record_change(i, None);
        self.state.restore(i, Some(c));
        true
    }

    /// Give flat i, and every still unassigned flat containing it, the level `c`.
    ///
    /// Returns the number of flats assigned.
    pub fn assign_upward(&mut self, i: usize, c: Level) -> usize {
        let memo = self.memo;
        let mut count = usize::from(self.assign(i, c));
        for &j in memo.containment().out_neighbors(i) {
            count += usize::from(self.assign(j, c));
        }
        count
    }

    /// Restore the modular cut to its state at `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }
}
