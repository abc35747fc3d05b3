// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Final check that a modular cut function describes a real extension.

use crate::lattice::{Level, Polymatroid};

/// True if `mu` satisfies, for every unordered pair of distinct flats f, g,
///
/// `mu(f ∩ g) + mu(closure(f ∪ g)) − delta(f, g) ≤ mu(f) + mu(g)`.
///
/// This re-checks every pair regardless of how the search built `mu`.
pub fn check_mu(p: &Polymatroid, mu: &[Level]) -> bool {
    find_violation(p, mu).is_none()
}

/// The first pair of flat indices, in array order, breaking the inequality.
pub fn find_violation(p: &Polymatroid, mu: &[Level]) -> Option<(usize, usize)> {
    let m = p.num_flats();
    debug_assert_eq!(mu.len(), m, "one level per flat");
    for f in 0..m {
        for g in f + 1..m {
            let lhs = mu[p.meet(f, g)] + mu[p.join(f, g)] - p.delta(f, g);
            if lhs > mu[f] + mu[g] {
                return Some((f, g));
            }
        }
    }
    None
}
