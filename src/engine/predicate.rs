// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the backtracking engine.
//!
//! # Example
//!
//! ```
//! use kpoly_ext::context::SearchContext;
//! use kpoly_ext::engine::{Predicate, PredicateResult};
//!
//! /// Gives the empty flat one of two levels.
//! #[derive(Debug)]
//! struct BottomLevel;
//!
//! impl Predicate for BottomLevel {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         ctx: &mut SearchContext,
//!         _round: usize,
//!         choice: usize,
//!     ) -> PredicateResult {
//!         ctx.assign(0, choice as i64);
//!         PredicateResult::Success
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Outcome of one call to a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Continue with the next predicate.
    Success,

    /// Run this predicate again with the next round.
    SuccessSamePredicate,

    /// Backtrack.
    Failure,

    /// Offer n alternatives, tried in order through `retry_pred`.
    Choices(usize),

    /// Hand the current state to the caller of `SearchEngine::search`.
    Suspend,
}

/// A predicate that ends a program: it fails or suspends, never succeeds.
pub trait TerminalPredicate: Predicate {}

/// One step of a predicate program.
///
/// All state changes go through the trailed setters on `SearchContext`. The
/// engine rewinds to the entry's checkpoint before each call, so every
/// choice starts from the same modular cut. Levels assigned by `try_pred`
/// before it returns `Choices` are kept for all of its choices.
pub trait Predicate: Debug {
    /// First call for `round`. Rounds start at 0 and advance on
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Apply alternative `choice` of the `Choices` returned for `round`.
    ///
    /// Must return `Success`, `SuccessSamePredicate` or `Failure`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
