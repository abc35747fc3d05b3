// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (tracked on the trail).
//!
//! - `ModularCut`: the partial level assignment over flat indices
//! - `statistics`: per-record counters

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::lattice::Level;

/// A modular cut function under construction.
///
/// Slot i holds the level of flat i of the flat array, or `None` while it is
/// still unassigned. All mutation during search goes through
/// `SearchContext::assign` so the trail sees every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularCut {
    levels: Vec<Option<Level>>,
}

impl ModularCut {
    /// An assignment with every one of `num_flats` slots unassigned.
    pub fn new(num_flats: usize) -> Self {
        Self {
            levels: vec![None; num_flats],
        }
    }

    pub fn get(&self, slot: usize) -> Option<Level> {
        self.levels[slot]
    }

    pub fn is_assigned(&self, slot: usize) -> bool {
        self.levels[slot].is_some()
    }

    /// Overwrite a slot without recording it. Only the trail and the context use this.
    pub(crate) fn restore(&mut self, slot: usize, level: Option<Level>) {
        self.levels[slot] = level;
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn assigned_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_some()).count()
    }

    /// Indices of flats with no level yet, ascending.
    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_none())
            .map(|(i, _)| i)
    }

    /// Indices of flats that have a level, ascending.
    pub fn assigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_some())
            .map(|(i, _)| i)
    }

    /// The completed function, if every slot is assigned.
    pub fn to_total(&self) -> Option<Vec<Level>> {
        self.levels.iter().copied().collect()
    }
}
