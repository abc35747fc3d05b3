// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `modular_cut`: ModularCutPredicate, one round per level of the new element
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod modular_cut;

pub use modular_cut::ModularCutPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with it
/// explores every alternative for its side effects.
///
/// # Example
///
/// ```
/// use kpoly_ext::context::SearchContext;
/// use kpoly_ext::engine::EngineBuilder;
/// use kpoly_ext::lattice::Polymatroid;
/// use kpoly_ext::predicates::FailPredicate;
/// use kpoly_ext::state::{Counters, Statistics};
///
/// let p: Polymatroid = "0,0 1,1".parse().unwrap();
/// let mut ctx = SearchContext::new(&p);
/// let engine = EngineBuilder::new()
///     .add(Statistics::counting_predicate(Counters::Candidates))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine runs the counter once, then fails
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::Candidates), 1);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Returns control to the caller with the search state intact. The caller
/// reads the solution from the context and may resume the engine.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        // Suspend predicate never retries
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
