// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-element extensions of k-polymatroids, up to isomorphism.
//!
//! A polymatroid is given by its lattice of flats: each flat is a subset of
//! the ground set, encoded as a bitmask, together with its rank. An extension
//! adds one new element e. It is described by a modular cut function mu,
//! which assigns each flat F the level `rank(closure(F ∪ {e})) − rank(F)`.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Per-instance data that never changes during search:
//! - The sorted flat array and mask lookup
//! - Containment and cover relations
//! - Closure and modular defect tables, filled on first use
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records level assignments for O(1) backtracking
//! - ModularCut - the partial mu function
//!
//! # Search Algorithm
//!
//! Each input record goes through three phases:
//!
//! 1. **ModularCutPredicate**: enumerate candidate mu functions, one level at a time
//! 2. **Validation and construction**: check submodularity and build the extension
//! 3. **Isomorph rejection**: keep an extension only if its canonical deletion
//!    is the input and its canonical form is new
//!
//! # Example
//!
//! ```
//! use kpoly_ext::{Extender, ExtensionOptions, Polymatroid};
//!
//! let point: Polymatroid = "0,0 1,1".parse().unwrap();
//! let found = Extender::new(ExtensionOptions::default()).extensions(&point).unwrap();
//! let records: Vec<String> = found.iter().map(|e| e.to_string()).collect();
//! assert_eq!(records, ["0,0 3,1", "0,0 1,1 2,1 3,2"]);
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod extension;
pub mod graph;
pub mod lattice;
pub mod memo;
pub mod predicates;
pub mod propagation;
pub mod state;
pub mod symmetry;
pub mod trail;

// Re-export commonly used types
pub use config::ExtensionOptions;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{Error, Result};
pub use extension::Extender;
pub use lattice::{FlatSet, Polymatroid};
pub use trail::Trail;
