// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The flat lattice of one k-polymatroid.
//!
//! A `Polymatroid` owns its flats (mask → rank) and lazily derives the
//! structures every later stage indexes into:
//!
//! - the flat array, sorted by (rank, mask), which gives each flat a stable index
//! - the inverse lookup from mask to index
//! - the containment and cover relations (see `relations`)
//! - closure and modular defect memo tables (see `crate::memo`)
//!
//! The flat set is fixed at construction. Derived structures are caches that
//! only ever grow, so a shared reference is all any stage needs.

use crate::graph::Digraph;
use crate::lattice::constants::{Rank, MAX_ELEMENTS};
use crate::lattice::{FlatSet, LatticeError};
use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;

/// A closed set together with its rank.
///
/// Field order makes the derived ordering (rank, mask), the flat array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flat {
    pub rank: Rank,
    pub mask: FlatSet,
}

impl Flat {
    pub fn new(mask: FlatSet, rank: Rank) -> Self {
        Self { rank, mask }
    }
}

/// Flat array and its inverse, built together.
#[derive(Debug, Clone)]
pub(crate) struct FlatIndex {
    pub(crate) array: Vec<Flat>,
    pub(crate) lookup: HashMap<FlatSet, usize>,
}

impl FlatIndex {
    fn build(flats: &HashMap<FlatSet, Rank>) -> Self {
        let mut array: Vec<Flat> =
            flats.iter().map(|(&mask, &rank)| Flat::new(mask, rank)).collect();
        array.sort();
        let lookup = array.iter().enumerate().map(|(i, f)| (f.mask, i)).collect();
        Self { array, lookup }
    }
}

/// A k-polymatroid given by its lattice of flats.
#[derive(Debug, Clone)]
pub struct Polymatroid {
    /// Number of ground elements.
    n: usize,
    /// Rank of every flat, keyed by mask.
    flats: HashMap<FlatSet, Rank>,
    index: OnceCell<FlatIndex>,
    pub(crate) containment: OnceCell<Digraph>,
    pub(crate) covers: OnceCell<Digraph>,
    pub(crate) closure_memo: RefCell<HashMap<FlatSet, FlatSet>>,
    pub(crate) delta_memo: RefCell<HashMap<(usize, usize), Rank>>,
}

impl Polymatroid {
    /// Build and validate a polymatroid from `(mask, rank)` pairs.
    ///
    /// The ground set size is the span of the union of all masks. The flats
    /// must include the full ground set, be closed under intersection, and
    /// have ranks that never decrease along containment.
    pub fn from_flats<I>(flats: I) -> Result<Self, LatticeError>
    where
        I: IntoIterator<Item = (FlatSet, Rank)>,
    {
        let mut table = HashMap::new();
        let mut union = FlatSet::empty();
        for (mask, rank) in flats {
            if mask.span() > MAX_ELEMENTS {
                return Err(LatticeError::TooManyElements {
                    mask,
                    element: mask.span() - 1,
                    max: MAX_ELEMENTS,
                });
            }
            if table.insert(mask, rank).is_some() {
                return Err(LatticeError::DuplicateFlat { mask });
            }
            union = union | mask;
        }
        if table.is_empty() {
            return Err(LatticeError::NoFlats);
        }

        let n = union.span();
        let ground = FlatSet::full(n);
        if !table.contains_key(&ground) {
            return Err(LatticeError::MissingGroundSet { mask: ground });
        }

        let candidate = Self::with_ground_size(n, table);
        candidate.validate()?;
        Ok(candidate)
    }

    /// Build a polymatroid on `n` elements without validation.
    ///
    /// Used for instances derived from an already valid one: extensions,
    /// deletions and relabelings.
    pub fn with_ground_size(n: usize, flats: HashMap<FlatSet, Rank>) -> Self {
        Self {
            n,
            flats,
            index: OnceCell::new(),
            containment: OnceCell::new(),
            covers: OnceCell::new(),
            closure_memo: RefCell::new(HashMap::new()),
            delta_memo: RefCell::new(HashMap::new()),
        }
    }

    fn validate(&self) -> Result<(), LatticeError> {
        let array = self.flats();
        for (i, f) in array.iter().enumerate() {
            for g in &array[i + 1..] {
                let meet = f.mask & g.mask;
                if !self.flats.contains_key(&meet) {
                    return Err(LatticeError::NotIntersectionClosed {
                        left: f.mask,
                        right: g.mask,
                        meet,
                    });
                }
                // Array order puts g after f, so only g ⊂ f can break monotonicity.
                if g.mask.is_proper_subset_of(f.mask) && g.rank > f.rank {
                    return Err(LatticeError::RankNotMonotone {
                        lower: g.mask,
                        lower_rank: g.rank,
                        upper: f.mask,
                        upper_rank: f.rank,
                    });
                }
            }
        }
        Ok(())
    }

    fn index(&self) -> &FlatIndex {
        self.index.get_or_init(|| FlatIndex::build(&self.flats))
    }

    /// Number of ground elements.
    pub fn ground_size(&self) -> usize {
        self.n
    }

    /// The full ground set as a mask.
    pub fn ground_set(&self) -> FlatSet {
        FlatSet::full(self.n)
    }

    /// Number of flats.
    pub fn num_flats(&self) -> usize {
        self.flats.len()
    }

    /// The flats sorted by (rank, mask).
    pub fn flats(&self) -> &[Flat] {
        &self.index().array
    }

    /// The flat with array index `i`.
    pub fn flat(&self, i: usize) -> Flat {
        self.index().array[i]
    }

    /// Rank of the flat with array index `i`.
    pub fn rank(&self, i: usize) -> Rank {
        self.index().array[i].rank
    }

    /// Mask of the flat with array index `i`.
    pub fn mask(&self, i: usize) -> FlatSet {
        self.index().array[i].mask
    }

    /// Rank of `mask` if it is a flat.
    pub fn rank_of(&self, mask: FlatSet) -> Option<Rank> {
        self.flats.get(&mask).copied()
    }

    /// True if `mask` is a flat.
    pub fn is_flat(&self, mask: FlatSet) -> bool {
        self.flats.contains_key(&mask)
    }

    /// Array index of `mask` if it is a flat.
    pub fn index_of(&self, mask: FlatSet) -> Option<usize> {
        self.index().lookup.get(&mask).copied()
    }

    /// Array index of a mask the caller knows to be a flat.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is not a flat: the lattice given was inconsistent.
    pub fn lookup(&self, mask: FlatSet) -> usize {
        match self.index_of(mask) {
            Some(i) => i,
            None => panic!("Invariant failure: {} is not a flat of this polymatroid", mask),
        }
    }

    /// Largest rank of any flat.
    pub fn max_rank(&self) -> Rank {
        self.flats.values().copied().max().unwrap_or(0)
    }

    /// Rank of the whole ground set (the largest rank if it is not listed).
    pub fn total_rank(&self) -> Rank {
        self.rank_of(self.ground_set()).unwrap_or_else(|| self.max_rank())
    }

    /// All `(mask, rank)` pairs, unordered.
    pub fn flat_table(&self) -> &HashMap<FlatSet, Rank> {
        &self.flats
    }
}

impl PartialEq for Polymatroid {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.flats == other.flats
    }
}

impl Eq for Polymatroid {}
