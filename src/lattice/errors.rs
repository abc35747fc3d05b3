// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for reading and validating flat lattices.

use crate::lattice::FlatSet;
use thiserror::Error;

/// A token of an `h,r` record could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The record has no tokens at all.
    #[error("empty record")]
    EmptyRecord,

    /// A token is not of the form `mask,rank`.
    #[error("malformed token '{token}': expected <hex mask>,<decimal rank>")]
    MalformedToken { token: String },

    /// The mask half of a token is not a hexadecimal number.
    #[error("bad mask in token '{token}': not a hexadecimal bitset")]
    BadMask { token: String },

    /// The rank half of a token is not a non-negative decimal number.
    #[error("bad rank in token '{token}': not a non-negative integer")]
    BadRank { token: String },

    /// The flats do not form a valid lattice.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

/// Structural defects of a flat set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// No flats were given.
    #[error("a polymatroid needs at least one flat")]
    NoFlats,

    /// A mask uses an element beyond the supported ground set.
    #[error("flat {mask} uses element {element}, beyond the maximum of {max} elements")]
    TooManyElements {
        mask: FlatSet,
        element: usize,
        max: usize,
    },

    /// The same mask was listed twice.
    #[error("flat {mask} is listed more than once")]
    DuplicateFlat { mask: FlatSet },

    /// The full ground set is not among the flats.
    #[error("ground set {mask} is not a flat")]
    MissingGroundSet { mask: FlatSet },

    /// Two flats intersect in a set that is not a flat.
    #[error("intersection {meet} of flats {left} and {right} is not a flat")]
    NotIntersectionClosed {
        left: FlatSet,
        right: FlatSet,
        meet: FlatSet,
    },

    /// A flat has larger rank than a flat containing it.
    #[error(
        "flat {lower} has rank {lower_rank} but is contained in flat {upper} of rank {upper_rank}"
    )]
    RankNotMonotone {
        lower: FlatSet,
        lower_rank: i64,
        upper: FlatSet,
        upper_rank: i64,
    },
}
