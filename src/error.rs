// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crate-level error type.

use crate::lattice::{LatticeError, ParseError};
use thiserror::Error;

/// Errors returned by the extension pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// The polymatroid already uses every supported element, so no new one fits.
    #[error("cannot extend a polymatroid on {n} elements: at most {max} elements are supported")]
    GroundSetFull { n: usize, max: usize },

    /// Writing an extension failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
