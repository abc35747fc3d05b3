// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Options for one extension run.

/// What the extender searches for and what it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionOptions {
    /// Emit every valid extension as built, with no isomorphism checks.
    pub emit_all: bool,
    /// Largest level the new element may add to a flat's rank.
    pub max_new_rank: u32,
    /// Discard extensions whose total rank exceeds this bound.
    pub max_total_rank: Option<u32>,
}

impl Default for ExtensionOptions {
    fn default() -> Self {
        Self {
            emit_all: false,
            max_new_rank: 1,
            max_total_rank: None,
        }
    }
}

impl ExtensionOptions {
    pub fn emit_all(mut self, emit_all: bool) -> Self {
        self.emit_all = emit_all;
        self
    }

    pub fn max_new_rank(mut self, max_new_rank: u32) -> Self {
        self.max_new_rank = max_new_rank;
        self
    }

    pub fn max_total_rank(mut self, max_total_rank: Option<u32>) -> Self {
        self.max_total_rank = max_total_rank;
        self
    }
}
