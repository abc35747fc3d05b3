// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular defect of a pair of flats.

use crate::lattice::{Polymatroid, Rank};

impl Polymatroid {
    /// Modular defect of flats i and j:
    /// `rank(f) + rank(g) − rank(f ∩ g) − rank(closure(f ∪ g))`.
    ///
    /// Zero exactly when the pair is modular. Both orderings are cached after
    /// the first computation.
    pub fn delta(&self, i: usize, j: usize) -> Rank {
        if let Some(&defect) = self.delta_memo.borrow().get(&(i, j)) {
            return defect;
        }
        let defect = self.rank(i) + self.rank(j)
            - self.rank(self.meet(i, j))
            - self.rank(self.join(i, j));

        let mut memo = self.delta_memo.borrow_mut();
        memo.insert((i, j), defect);
        memo.insert((j, i), defect);
        defect
    }
}
