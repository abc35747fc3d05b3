// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Materializing an extension from its modular cut function.

use crate::lattice::{FlatSet, Level, Polymatroid, Rank};
use std::collections::HashMap;

/// The extension of `p` by a new element e = n described by `mu`.
///
/// For each flat f with level v:
/// - v == 0: e is in the closure of f, so only f ∪ e is a flat, of rank(f)
/// - v > 0: f stays a flat, and f ∪ e is a flat of rank(f) + v unless some
///   cover g of f has rank(g) + mu(g) equal to it, in which case
///   closure(f ∪ e) is g ∪ e
///
/// The caller ensures `p` has room for another element and that `mu` passed
/// `check_mu`.
pub fn produce_extension(p: &Polymatroid, mu: &[Level]) -> Polymatroid {
    let n = p.ground_size();
    let covers = p.covers();
    let mut flats: HashMap<FlatSet, Rank> = HashMap::with_capacity(2 * p.num_flats());

    for (i, flat) in p.flats().iter().enumerate() {
        let v = mu[i];
        if v == 0 {
            flats.insert(flat.mask.with(n), flat.rank);
            continue;
        }

        flats.insert(flat.mask, flat.rank);
        let absorbed = covers
            .out_neighbors(i)
            .iter()
            .any(|&g| flat.rank + v == p.rank(g) + mu[g]);
        if !absorbed {
            flats.insert(flat.mask.with(n), flat.rank + v);
        }
    }
    Polymatroid::with_ground_size(n + 1, flats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extend(record: &str, mu: &[Level]) -> String {
        let p: Polymatroid = record.parse().unwrap();
        produce_extension(&p, mu).to_string()
    }

    #[test]
    fn test_loop() {
        assert_eq!(extend("0,0 1,1", &[0, 0]), "2,0 3,1");
    }

    #[test]
    fn test_parallel_element() {
        assert_eq!(extend("0,0 1,1", &[1, 0]), "0,0 3,1");
    }

    #[test]
    fn test_free_element() {
        assert_eq!(extend("0,0 1,1", &[1, 1]), "0,0 1,1 2,1 3,2");
    }

    #[test]
    fn test_point_in_general_position_on_a_line() {
        assert_eq!(extend("0,0 1,1 2,1 3,2", &[1, 1, 1, 0]), "0,0 1,1 2,1 4,1 7,2");
    }

    #[test]
    fn test_coloop() {
        assert_eq!(
            extend("0,0 1,1 2,1 3,2", &[1, 1, 1, 1]),
            "0,0 1,1 2,1 4,1 3,2 5,2 6,2 7,3"
        );
    }

    #[test]
    fn test_extension_has_one_more_element() {
        let p: Polymatroid = "0,0 1,1 2,1 3,2".parse().unwrap();
        let e = produce_extension(&p, &[1, 0, 1, 0]);
        assert_eq!(e.ground_size(), 3);
        // e parallel to element 0.
        assert_eq!(e.to_string(), "0,0 2,1 5,1 7,2");
    }
}
