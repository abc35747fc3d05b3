// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed bounds for ground sets and derived constants.

/// Maximum number of ground elements in any polymatroid handled by this crate.
///
/// Extensions add one element, so a polymatroid with `MAX_ELEMENTS` elements
/// can be read and labeled but not extended.
pub const MAX_ELEMENTS: usize = 16;

/// Bitmask with every element of the largest ground set.
pub const FULL_MASK: u32 = (1 << MAX_ELEMENTS) - 1;

/// Upper bound on the number of flats of one polymatroid (every subset a flat).
pub const MAX_FLATS: usize = 1 << MAX_ELEMENTS;

/// Integer rank of a flat.
pub type Rank = i64;

/// Level of a flat in a modular cut function: the rank a new element adds to it.
pub type Level = i64;
