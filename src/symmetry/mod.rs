// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of polymatroids up to relabeling of the ground set.
//!
//! ## Module Structure
//!
//! - `canonical`: incidence graph, canonical labeling and canonical deletion
//! - `mod`: Public API and re-exports

pub mod canonical;

pub use canonical::{canonical_deletion, canonical_label, incidence_graph};
