// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ModularCutPredicate - builds a modular cut function one level at a time.
//!
//! Round c of this predicate decides which flats take level c:
//! 1. propagation forces the flats whose level is already determined
//! 2. the independent sets of the choice graph, then the empty set, are the
//!    choices for the new minimal members of level c
//! 3. a choice assigns its flats, and every unassigned flat above them, to c
//!
//! At the last round every remaining flat takes the highest level and the
//! function is complete.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::graph::IndependentSetOracle;
use crate::lattice::Level;
use crate::propagation::{choice_graph, force_levels};

/// Assigns levels 0..=max_level, one round per level.
///
/// # Choices
///
/// For round c < max_level, choice k assigns the k-th independent set of the
/// level-c choice graph; the final choice is the empty set, which defers the
/// minimal members of level c to later rounds.
#[derive(Debug)]
pub struct ModularCutPredicate<I: IndependentSetOracle> {
    oracle: I,
    max_level: Level,
    /// Flat sets offered as choices, per round. Only rounds up to the current
    /// one are meaningful.
    choices: Vec<Vec<Vec<usize>>>,
}

impl<I: IndependentSetOracle> ModularCutPredicate<I> {
    pub fn new(oracle: I, max_level: Level) -> Self {
        Self {
            oracle,
            max_level,
            choices: Vec::new(),
        }
    }

    fn fill_remaining(ctx: &mut SearchContext, c: Level) {
        let unassigned: Vec<usize> = ctx.state.unassigned().collect();
        for f in unassigned {
            ctx.assign(f, c);
        }
    }
}

impl<I: IndependentSetOracle> Predicate for ModularCutPredicate<I> {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let c = round as Level;
        if c >= self.max_level {
            Self::fill_remaining(ctx, c);
            return PredicateResult::Success;
        }

        force_levels(ctx, c);
        let graph = choice_graph(ctx, c);
        let mut sets: Vec<Vec<usize>> = self
            .oracle
            .independent_sets(&graph)
            .into_iter()
            .map(|set| set.into_iter().map(|v| graph.label(v)).collect())
            .collect();
        sets.push(Vec::new());

        if self.choices.len() <= round {
            self.choices.resize(round + 1, Vec::new());
        }
        let count = sets.len();
        self.choices[round] = sets;
        PredicateResult::Choices(count)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let c = round as Level;
        for &f in &self.choices[round][choice] {
            ctx.assign_upward(f, c);
        }
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ModularCut"
    }
}
