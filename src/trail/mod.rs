// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the modular cut search.
//!
//! Every assignment made to a `ModularCut` during search is recorded here as
//! the slot and its previous value. Rewinding to a checkpoint replays those
//! entries in reverse, so backtracking costs time proportional to the work
//! being undone.

use crate::lattice::{Level, MAX_FLATS};
use crate::state::ModularCut;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Flat index whose level changed.
    slot: usize,
    /// The level before the change.
    old_level: Option<Level>,
}

/// The trail of level assignments.
///
/// A checkpoint is just the trail length at some moment; the engine keeps one
/// per stack entry.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Each flat is assigned at most once per search path.
    const MAX_SIZE: usize = MAX_FLATS;

    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The current position, for a later `rewind_to`.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that `slot` held `old_level` before the change about to be made.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub(crate) fn record_change(&mut self, slot: usize, old_level: Option<Level>) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { slot, old_level });
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize, cut: &mut ModularCut) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                cut.restore(entry.slot, entry.old_level);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(trail: &mut Trail, cut: &mut ModularCut, slot: usize, level: Level) {
        trail.record_change(slot, cut.get(slot));
        cut.restore(slot, Some(level));
    }

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut trail = Trail::new();
        let mut cut = ModularCut::new(4);

        assign(&mut trail, &mut cut, 0, 0);
        assign(&mut trail, &mut cut, 1, 0);
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 2);

        assign(&mut trail, &mut cut, 2, 1);
        assign(&mut trail, &mut cut, 3, 1);
        assert_eq!(trail.len(), 4);

        trail.rewind_to(checkpoint, &mut cut);
        assert_eq!(trail.len(), 2);
        assert_eq!(cut.get(0), Some(0));
        assert_eq!(cut.get(1), Some(0));
        assert_eq!(cut.get(2), None);
        assert_eq!(cut.get(3), None);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();
        let mut cut = ModularCut::new(3);

        assign(&mut trail, &mut cut, 0, 0);
        let outer = trail.checkpoint();
        assign(&mut trail, &mut cut, 1, 1);
        let inner = trail.checkpoint();
        assign(&mut trail, &mut cut, 2, 2);

        trail.rewind_to(inner, &mut cut);
        assert_eq!(cut.get(1), Some(1));
        assert_eq!(cut.get(2), None);

        trail.rewind_to(outer, &mut cut);
        assert_eq!(cut.get(0), Some(0));
        assert_eq!(cut.get(1), None);
    }

    #[test]
    fn test_rewind_restores_overwritten_value_in_order() {
        let mut trail = Trail::new();
        let mut cut = ModularCut::new(1);

        let start = trail.checkpoint();
        assign(&mut trail, &mut cut, 0, 1);
        assign(&mut trail, &mut cut, 0, 2);
        trail.rewind_to(start, &mut cut);
        assert_eq!(cut.get(0), None);
    }

    #[test]
    fn test_rewind_to_current_position_is_a_no_op() {
        let mut trail = Trail::new();
        let mut cut = ModularCut::new(1);
        assign(&mut trail, &mut cut, 0, 1);
        trail.rewind_to(trail.checkpoint(), &mut cut);
        assert_eq!(cut.get(0), Some(1));
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        for i in 0..Trail::MAX_SIZE + 1 {
            trail.record_change(i, None);
        }
    }
}
