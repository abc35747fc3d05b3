// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FlatSet type for representing sets of ground elements as bitsets.
//!
//! A FlatSet is a compact representation of a subset of the ground set,
//! where bit i represents the presence of element i. It is both the identity
//! of a flat and the key type used throughout the search.
//!
//! # Examples
//!
//! ```
//! use kpoly_ext::lattice::FlatSet;
//!
//! let mut set = FlatSet::empty();
//! set.insert(0);
//! set.insert(2);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "5");
//! assert!(FlatSet::from_bits(1).is_subset_of(set));
//!
//! let elements: Vec<usize> = set.iter().collect();
//! assert_eq!(elements, vec![0, 2]);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A set of ground elements represented as a bitset.
///
/// Bit i (counting from LSB) is set if element i is in the set. Ground sets
/// never exceed `MAX_ELEMENTS` elements, so `u32` storage always suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlatSet(u32);

impl FlatSet {
    /// Create an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the set containing elements 0..n.
    pub const fn full(n: usize) -> Self {
        if n >= 32 {
            Self(u32::MAX)
        } else {
            Self((1u32 << n) - 1)
        }
    }

    /// Create a set from a raw bit value.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Create the singleton set {element}.
    pub const fn singleton(element: usize) -> Self {
        Self(1 << element)
    }

    /// Check if the set contains a specific element.
    pub fn contains(self, element: usize) -> bool {
        (self.0 >> element) & 1 != 0
    }

    /// Insert an element into the set.
    pub fn insert(&mut self, element: usize) {
        self.0 |= 1 << element;
    }

    /// Remove an element from the set.
    pub fn remove(&mut self, element: usize) {
        self.0 &= !(1 << element);
    }

    /// A copy of this set without `element`.
    pub fn without(self, element: usize) -> Self {
        Self(self.0 & !(1 << element))
    }

    /// A copy of this set with `element` added.
    pub fn with(self, element: usize) -> Self {
        Self(self.0 | (1 << element))
    }

    /// True if every element of `self` is in `other`.
    pub fn is_subset_of(self, other: FlatSet) -> bool {
        self.0 & other.0 == self.0
    }

    /// True if `self` is a subset of `other` and differs from it.
    pub fn is_proper_subset_of(self, other: FlatSet) -> bool {
        self != other && self.is_subset_of(other)
    }

    /// True if one of the two sets contains the other.
    pub fn is_comparable(self, other: FlatSet) -> bool {
        self.is_subset_of(other) || other.is_subset_of(self)
    }

    /// Get the number of elements (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of elements a ground set needs to contain this set:
    /// the index of the highest set bit plus one.
    pub fn span(self) -> usize {
        (u32::BITS - self.0.leading_zeros()) as usize
    }

    /// Move bit j to bit `label[j]` for every element j < `label.len()`.
    pub fn relabel(self, label: &[usize]) -> Self {
        let mut result = Self::empty();
        for (j, &target) in label.iter().enumerate() {
            if self.contains(j) {
                result.insert(target);
            }
        }
        result
    }

    /// Iterate over all elements in the set in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        FlatSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over elements in a FlatSet.
struct FlatSetIter {
    bits: u32,
    index: usize,
}

impl Iterator for FlatSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < u32::BITS as usize && self.bits >> self.index != 0 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(idx);
            }
        }
        None
    }
}

impl BitAnd for FlatSet {
    type Output = FlatSet;

    fn bitand(self, rhs: FlatSet) -> FlatSet {
        FlatSet(self.0 & rhs.0)
    }
}

impl BitOr for FlatSet {
    type Output = FlatSet;

    fn bitor(self, rhs: FlatSet) -> FlatSet {
        FlatSet(self.0 | rhs.0)
    }
}

impl fmt::Display for FlatSet {
    /// Format as lowercase hexadecimal without prefix, the mask half of an `h,r` token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::LowerHex for FlatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = FlatSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
        assert_eq!(set.span(), 0);
    }

    #[test]
    fn test_full() {
        let set = FlatSet::full(4);
        assert_eq!(set.bits(), 0xf);
        assert_eq!(set.len(), 4);
        assert_eq!(set.span(), 4);
        assert_eq!(FlatSet::full(0), FlatSet::empty());
    }

    #[test]
    fn test_insert_remove() {
        let mut set = FlatSet::empty();
        set.insert(3);
        assert!(set.contains(3));
        assert!(!set.contains(2));

        set.remove(3);
        set.remove(3);
        assert!(set.is_empty());
    }

    #[test]
    fn test_subset_relations() {
        let a = FlatSet::from_bits(0b0011);
        let b = FlatSet::from_bits(0b0111);
        let c = FlatSet::from_bits(0b1000);

        assert!(a.is_subset_of(b));
        assert!(a.is_proper_subset_of(b));
        assert!(!b.is_proper_subset_of(b));
        assert!(b.is_subset_of(b));
        assert!(a.is_comparable(b));
        assert!(!a.is_comparable(c));
        assert!(FlatSet::empty().is_subset_of(c));
    }

    #[test]
    fn test_span_uses_highest_bit() {
        assert_eq!(FlatSet::from_bits(0b1000).span(), 4);
        assert_eq!(FlatSet::from_bits(0b1001).span(), 4);
        assert_eq!(FlatSet::singleton(15).span(), 16);
    }

    #[test]
    fn test_relabel() {
        // Swap elements 0 and 2, keep 1.
        let label = [2, 1, 0];
        assert_eq!(FlatSet::from_bits(0b001).relabel(&label), FlatSet::from_bits(0b100));
        assert_eq!(FlatSet::from_bits(0b011).relabel(&label), FlatSet::from_bits(0b110));
        assert_eq!(FlatSet::from_bits(0b111).relabel(&label), FlatSet::from_bits(0b111));
    }

    #[test]
    fn test_with_without() {
        let set = FlatSet::from_bits(0b101);
        assert_eq!(set.without(2), FlatSet::from_bits(0b001));
        assert_eq!(set.with(1), FlatSet::from_bits(0b111));
        assert_eq!(set.without(1), set);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(format!("{}", FlatSet::from_bits(0)), "0");
        assert_eq!(format!("{}", FlatSet::from_bits(0xab)), "ab");
        assert_eq!(format!("{:x}", FlatSet::from_bits(0xffff)), "ffff");
    }

    #[test]
    fn test_ordering_matches_bits() {
        assert!(FlatSet::from_bits(3) < FlatSet::from_bits(4));
        assert_eq!(FlatSet::from_bits(6) & FlatSet::from_bits(3), FlatSet::from_bits(2));
        assert_eq!(FlatSet::from_bits(6) | FlatSet::from_bits(3), FlatSet::from_bits(7));
    }
}
