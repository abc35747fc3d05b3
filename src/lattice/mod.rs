// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flat lattice model.
//!
//! This module contains the types describing one polymatroid instance:
//! - FlatSet: bitset of ground elements, the identity of a flat
//! - Flat: a (rank, mask) pair
//! - Polymatroid: the flat set with its sorted array, lookup and relations
//! - codec: the `h,r` text encoding

pub mod codec;
pub mod constants;
pub mod errors;
pub mod flat_set;
pub mod polymatroid;
pub mod relations;

pub use constants::*;
pub use errors::{LatticeError, ParseError};
pub use flat_set::FlatSet;
pub use polymatroid::{Flat, Polymatroid};
