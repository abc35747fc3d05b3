// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use kpoly_ext::lattice::{FlatSet, Polymatroid};
use kpoly_ext::{Extender, ExtensionOptions};

/// A single point of rank 1.
pub const POINT: &str = "0,0 1,1";

/// Two points of rank 1 whose union also has rank 1.
pub const RANK_ONE_PAIR: &str = "0,0 1,1 2,1 3,1";

/// U(2,2): two free points.
pub const FREE_PAIR: &str = "0,0 1,1 2,1 3,2";

/// U(2,3): three points on a line.
pub const LINE_OF_THREE: &str = "0,0 1,1 2,1 4,1 7,2";

/// U(3,3): three free points.
pub const FREE_TRIPLE: &str = "0,0 1,1 2,1 4,1 3,2 5,2 6,2 7,3";

/// A rank-2 point and a rank-1 point, in general position.
pub const MIXED_PAIR: &str = "0,0 1,2 2,1 3,3";

/// Fixtures used by the property tests.
pub const FIXTURES: &[&str] = &[
    POINT,
    RANK_ONE_PAIR,
    FREE_PAIR,
    LINE_OF_THREE,
    FREE_TRIPLE,
    MIXED_PAIR,
];

pub fn parse(record: &str) -> Polymatroid {
    record.parse().unwrap_or_else(|e| panic!("bad fixture '{}': {}", record, e))
}

/// The same polymatroid with element j renamed to `label[j]`.
pub fn relabel(p: &Polymatroid, label: &[usize]) -> Polymatroid {
    let flats = p.flats().iter().map(|f| (f.mask.relabel(label), f.rank));
    Polymatroid::from_flats(flats).unwrap()
}

/// Every accepted extension of `record`, as strings.
pub fn extension_strings(record: &str, options: ExtensionOptions) -> Vec<String> {
    Extender::new(options)
        .extensions(&parse(record))
        .unwrap()
        .iter()
        .map(|e| e.to_string())
        .collect()
}

/// Every subset of the ground set of `p`.
pub fn all_masks(p: &Polymatroid) -> impl Iterator<Item = FlatSet> {
    (0..1u32 << p.ground_size()).map(FlatSet::from_bits)
}
