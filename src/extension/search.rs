// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy enumeration of candidate modular cut functions.

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::graph::IndependentSetOracle;
use crate::lattice::{Level, Polymatroid};
use crate::predicates::{ModularCutPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};

/// Iterator over the complete candidate functions for one polymatroid.
///
/// The engine suspends after each candidate, so the caller controls how far
/// the search runs. Each item is indexed by flat array position.
///
/// ```
/// use kpoly_ext::extension::ExtensionSearch;
/// use kpoly_ext::graph::BacktrackingIndependentSets;
/// use kpoly_ext::lattice::Polymatroid;
///
/// let p: Polymatroid = "0,0 1,1".parse().unwrap();
/// let first = ExtensionSearch::new(&p, BacktrackingIndependentSets, 1).next();
/// assert_eq!(first, Some(vec![0, 0]));
/// ```
#[derive(Debug)]
pub struct ExtensionSearch<'p> {
    ctx: SearchContext<'p>,
    engine: Option<SearchEngine>,
}

impl<'p> ExtensionSearch<'p> {
    /// Search levels 0..=max_new_rank for extensions of `p`.
    pub fn new<I: IndependentSetOracle + 'static>(
        p: &'p Polymatroid,
        oracle: I,
        max_new_rank: u32,
    ) -> Self {
        let engine = EngineBuilder::new()
            .add(Box::new(ModularCutPredicate::new(oracle, Level::from(max_new_rank))))
            .add(Statistics::counting_predicate(Counters::Candidates))
            .terminal(Box::new(SuspendPredicate))
            .build();
        Self {
            ctx: SearchContext::new(p),
            engine: Some(engine),
        }
    }

    /// Counters recorded by the search so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for ExtensionSearch<'_> {
    type Item = Vec<Level>;

    fn next(&mut self) -> Option<Self::Item> {
        let engine = self.engine.take()?;
        let engine = engine.search(&mut self.ctx)?;
        self.engine = Some(engine);
        match self.ctx.state.to_total() {
            Some(mu) => Some(mu),
            None => panic!(
                "Invariant failure: search suspended with {} of {} flats assigned",
                self.ctx.state.assigned_count(),
                self.ctx.state.len()
            ),
        }
    }
}
