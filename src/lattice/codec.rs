// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Textual `h,r` flat-list encoding.
//!
//! A record is a whitespace-separated list of tokens `h,r`, where `h` is a
//! hexadecimal bitset and `r` a decimal rank. For example
//!
//! ```text
//! 0,0 1,2 2,2 3,3
//! ```
//!
//! is two lines placed in a plane. Output uses the same tokens in flat array
//! order, lowercase hex, single spaces.
//!
//! ```
//! use kpoly_ext::lattice::Polymatroid;
//!
//! let p: Polymatroid = "3,3 0,0 2,2 1,2".parse().unwrap();
//! assert_eq!(p.to_string(), "0,0 1,2 2,2 3,3");
//! ```

use crate::lattice::constants::Rank;
use crate::lattice::{FlatSet, ParseError, Polymatroid};
use std::fmt;
use std::str::FromStr;

/// Parse one `h,r` token.
fn parse_token(token: &str) -> Result<(FlatSet, Rank), ParseError> {
    let (mask, rank) = token.split_once(',').ok_or_else(|| ParseError::MalformedToken {
        token: token.to_string(),
    })?;
    // The integer parsers accept a leading '+'; the format does not.
    if !mask.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::BadMask {
            token: token.to_string(),
        });
    }
    if !rank.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::BadRank {
            token: token.to_string(),
        });
    }
    let mask = u32::from_str_radix(mask, 16).map_err(|_| ParseError::BadMask {
        token: token.to_string(),
    })?;
    let rank: u32 = rank.parse().map_err(|_| ParseError::BadRank {
        token: token.to_string(),
    })?;
    Ok((FlatSet::from_bits(mask), Rank::from(rank)))
}

impl FromStr for Polymatroid {
    type Err = ParseError;

    /// Parse a record into a fresh, validated instance.
    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let flats = record
            .split_whitespace()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;
        if flats.is_empty() {
            return Err(ParseError::EmptyRecord);
        }
        Ok(Polymatroid::from_flats(flats)?)
    }
}

impl fmt::Display for Polymatroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flat) in self.flats().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{},{}", flat.mask, flat.rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::LatticeError;

    #[test]
    fn test_parse_point() {
        let p: Polymatroid = "0,0 1,1".parse().unwrap();
        assert_eq!(p.ground_size(), 1);
        assert_eq!(p.num_flats(), 2);
        assert_eq!(p.rank_of(FlatSet::from_bits(1)), Some(1));
    }

    #[test]
    fn test_parse_uppercase_hex() {
        let q: Polymatroid = "0,0 1,1 2,1 4,1 8,1 F,2".parse().unwrap();
        assert_eq!(q.ground_size(), 4);
        assert_eq!(q.to_string(), "0,0 1,1 2,1 4,1 8,1 f,2");
    }

    #[test]
    fn test_ground_size_from_highest_bit() {
        // Element 0 is a loop, so element 1 occupies the highest bit.
        let p: Polymatroid = "1,0 3,1".parse().unwrap();
        assert_eq!(p.ground_size(), 2);
    }

    #[test]
    fn test_display_sorted() {
        let p: Polymatroid = "7,2 4,1 2,1 1,1 0,0".parse().unwrap();
        assert_eq!(p.to_string(), "0,0 1,1 2,1 4,1 7,2");
    }

    #[test]
    fn test_parse_errors_name_token() {
        assert_eq!(
            "0,0 1".parse::<Polymatroid>().unwrap_err(),
            ParseError::MalformedToken { token: "1".to_string() }
        );
        assert_eq!(
            "0,0 xy,1".parse::<Polymatroid>().unwrap_err(),
            ParseError::BadMask { token: "xy,1".to_string() }
        );
        assert_eq!(
            "0,0 1,-1".parse::<Polymatroid>().unwrap_err(),
            ParseError::BadRank { token: "1,-1".to_string() }
        );
        assert_eq!("   ".parse::<Polymatroid>().unwrap_err(), ParseError::EmptyRecord);
    }

    #[test]
    fn test_signed_numbers_are_rejected() {
        assert_eq!(
            "0,0 +1,1".parse::<Polymatroid>().unwrap_err(),
            ParseError::BadMask { token: "+1,1".to_string() }
        );
        assert_eq!(
            "0,0 1,+1".parse::<Polymatroid>().unwrap_err(),
            ParseError::BadRank { token: "1,+1".to_string() }
        );
        assert_eq!(
            "+0,+0".parse::<Polymatroid>().unwrap_err(),
            ParseError::BadMask { token: "+0,+0".to_string() }
        );
    }

    #[test]
    fn test_parse_reports_lattice_error() {
        let err = "0,0 1,1 2,1".parse::<Polymatroid>().unwrap_err();
        assert!(matches!(err, ParseError::Lattice(LatticeError::MissingGroundSet { .. })));
    }

    #[test]
    fn test_parsing_is_per_instance() {
        let a: Polymatroid = "0,0 1,1".parse().unwrap();
        let b: Polymatroid = "0,0 1,1 2,1 3,2".parse().unwrap();
        assert_eq!(a.num_flats(), 2);
        assert_eq!(b.num_flats(), 4);
        assert_eq!(a.to_string(), "0,0 1,1");
    }
}
