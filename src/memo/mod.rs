// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized lattice computations (closure and modular defect).
//!
//! Both tables live on the `Polymatroid` they describe and are never shared
//! across instances. They only grow: a cached entry is never invalidated,
//! since the flat set of an instance cannot change.

pub mod closure;
pub mod defect;
