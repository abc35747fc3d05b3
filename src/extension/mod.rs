// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-element extensions up to isomorphism.
//!
//! - `search`: lazy enumeration of candidate modular cut functions
//! - `validate`: the pairwise submodularity check every candidate must pass
//! - `build`: the extended polymatroid described by a valid function
//! - `Extender`: ties these together and rejects isomorphs
//!
//! # Isomorph rejection
//!
//! Outside emit-all mode an extension E of P is emitted only when the
//! canonical deletion of canonical(E) equals canonical(P), and only the first
//! time its canonical form is seen for this P.

pub mod build;
pub mod search;
pub mod validate;

pub use build::produce_extension;
pub use search::ExtensionSearch;
pub use validate::{check_mu, find_violation};

use crate::config::ExtensionOptions;
use crate::error::{Error, Result};
use crate::graph::{
    BacktrackingIndependentSets, CanonicalOracle, IndependentSetOracle, RefinementCanonicalizer,
};
use crate::lattice::{Polymatroid, Rank, MAX_ELEMENTS};
use crate::state::{Counters, Statistics};
use crate::symmetry::{canonical_deletion, canonical_label};
use std::collections::HashSet;

/// Runs the extension pipeline for one polymatroid at a time.
#[derive(Debug, Clone)]
pub struct Extender<C = RefinementCanonicalizer, I = BacktrackingIndependentSets>
where
    C: CanonicalOracle,
    I: IndependentSetOracle + Clone + 'static,
{
    options: ExtensionOptions,
    canonicalizer: C,
    independent_sets: I,
}

impl Extender {
    /// An extender using the built-in oracles.
    pub fn new(options: ExtensionOptions) -> Self {
        Self::with_oracles(options, RefinementCanonicalizer, BacktrackingIndependentSets)
    }
}

impl<C, I> Extender<C, I>
where
    C: CanonicalOracle,
    I: IndependentSetOracle + Clone + 'static,
{
    pub fn with_oracles(options: ExtensionOptions, canonicalizer: C, independent_sets: I) -> Self {
        Self {
            options,
            canonicalizer,
            independent_sets,
        }
    }

    pub fn options(&self) -> &ExtensionOptions {
        &self.options
    }

    /// The canonical form of `p` under this extender's canonicalizer.
    pub fn canonicalize(&self, p: &Polymatroid) -> Polymatroid {
        canonical_label(p, &self.canonicalizer)
    }

    /// Pass every accepted extension of `p` to `emit`, in discovery order.
    ///
    /// Returns the counters for this polymatroid. An error from `emit` stops
    /// the search and is returned as is.
    pub fn extend<F>(&self, p: &Polymatroid, mut emit: F) -> Result<Statistics>
    where
        F: FnMut(&Polymatroid) -> Result<()>,
    {
        let n = p.ground_size();
        if n >= MAX_ELEMENTS {
            return Err(Error::GroundSetFull { n, max: MAX_ELEMENTS });
        }

        let target = if self.options.emit_all {
            None
        } else {
            Some(self.canonicalize(p))
        };
        let max_total_rank = self.options.max_total_rank.map(Rank::from);
        let mut seen: HashSet<String> = HashSet::new();
        let mut statistics = Statistics::new();

        let mut search =
            ExtensionSearch::new(p, self.independent_sets.clone(), self.options.max_new_rank);
        for mu in &mut search {
            if !check_mu(p, &mu) {
                statistics.increment_counter(Counters::Rejected);
                continue;
            }
            let extension = produce_extension(p, &mu);
            if max_total_rank.is_some_and(|bound| extension.total_rank() > bound) {
                statistics.increment_counter(Counters::RankFiltered);
                continue;
            }

            let target = match &target {
                Some(target) => target,
                None => {
                    emit(&extension)?;
                    statistics.increment_counter(Counters::Emitted);
                    continue;
                }
            };

            let canonical = self.canonicalize(&extension);
            if canonical_deletion(&canonical, &self.canonicalizer) != *target {
                statistics.increment_counter(Counters::DeletionMismatch);
                continue;
            }
            if !seen.insert(canonical.to_string()) {
                statistics.increment_counter(Counters::Duplicates);
                continue;
            }
            emit(&canonical)?;
            statistics.increment_counter(Counters::Emitted);
        }

        statistics.merge(search.statistics());
        Ok(statistics)
    }

    /// Collect every accepted extension of `p`.
    pub fn extensions(&self, p: &Polymatroid) -> Result<Vec<Polymatroid>> {
        let mut found = Vec::new();
        self.extend(p, |e| {
            found.push(e.clone());
            Ok(())
        })?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(record: &str, options: ExtensionOptions) -> Vec<String> {
        let p: Polymatroid = record.parse().unwrap();
        Extender::new(options)
            .extensions(&p)
            .unwrap()
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_emit_all_single_point() {
        let all = strings("0,0 1,1", ExtensionOptions::default().emit_all(true));
        assert_eq!(all, vec!["2,0 3,1", "0,0 3,1", "0,0 1,1 2,1 3,2"]);
    }

    #[test]
    fn test_isomorph_rejection_single_point() {
        // The loop's canonical deletion removes the other element, so it is rejected.
        let found = strings("0,0 1,1", ExtensionOptions::default());
        assert_eq!(found, vec!["0,0 3,1", "0,0 1,1 2,1 3,2"]);
    }

    #[test]
    fn test_statistics_account_for_every_candidate() {
        let p: Polymatroid = "0,0 1,1".parse().unwrap();
        let stats = Extender::new(ExtensionOptions::default()).extend(&p, |_| Ok(())).unwrap();
        assert_eq!(stats.get(Counters::Candidates), 3);
        assert_eq!(stats.get(Counters::DeletionMismatch), 1);
        assert_eq!(stats.get(Counters::Emitted), 2);
    }

    #[test]
    fn test_total_rank_filter() {
        let options = ExtensionOptions::default().emit_all(true).max_total_rank(Some(1));
        let found = strings("0,0 1,1", options);
        assert_eq!(found, vec!["2,0 3,1", "0,0 3,1"]);
    }

    #[test]
    fn test_emit_error_stops_the_search() {
        let p: Polymatroid = "0,0 1,1".parse().unwrap();
        let mut calls = 0;
        let result = Extender::new(ExtensionOptions::default().emit_all(true)).extend(&p, |_| {
            calls += 1;
            Err(Error::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed")))
        });
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_full_ground_set_cannot_be_extended() {
        let p: Polymatroid = "0,0 ffff,1".parse().unwrap();
        let result = Extender::new(ExtensionOptions::default()).extensions(&p);
        assert!(matches!(result, Err(Error::GroundSetFull { n: 16, max: 16 })));
    }
}
