// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Level propagation for the modular cut search.
//!
//! The search assigns levels c = 0, 1, 2, ... in turn. Before the flats that
//! newly enter level c are chosen, two passes fix what is already determined.
//!
//! # Forcing
//!
//! **Cover forcing**: an unassigned flat f with a cover g such that
//! `c == rank(g) + mu(g) − rank(f)` must take level c.
//!
//! **Intersection forcing** (to a fixed point): for assigned f, g with f ∩ g
//! unassigned, `c == mu(f) + mu(g) + delta(f, g) − mu(closure(f ∪ g))`
//! forces f ∩ g to level c.
//!
//! A flat forced to c drags every unassigned flat containing it to c as well.
//! Assigned flats therefore stay up-closed, which guarantees that the closure
//! of a union involving an assigned flat is itself assigned.
//!
//! # Choice graph
//!
//! The candidates for minimal members of level c are the unassigned flats
//! that survive two deletion rules against every assigned flat f:
//! with `k = mu(f) + c + delta(f, g) − mu(closure(f ∪ g))`,
//! - k < c: g can never reach level c
//! - k == c and g ⊄ f: g cannot be a minimal member of level c
//!
//! Two candidates are joined when they cannot both be chosen: they are
//! comparable, or `2c + delta(f, g) − mu'(closure(f ∪ g)) ≤ c` where mu' reads
//! an unassigned union as c. The independent sets of this graph are exactly
//! the admissible sets of new minimal members.

use crate::context::SearchContext;
use crate::graph::UndirectedGraph;
use crate::lattice::Level;

/// Apply cover forcing, then intersection forcing until nothing changes.
///
/// Returns the number of flats that received level `c`.
pub fn force_levels(ctx: &mut SearchContext, c: Level) -> usize {
    cover_forcing(ctx, c) + intersection_forcing(ctx, c)
}

fn cover_forcing(ctx: &mut SearchContext, c: Level) -> usize {
    let memo = ctx.memo;
    let mut forced = 0;
    for f in 0..memo.num_flats() {
        if ctx.state.is_assigned(f) {
            continue;
        }
        let fires = memo
            .covers()
            .out_neighbors(f)
            .iter()
            .any(|&g| ctx.level(g).is_some_and(|v| c == memo.rank(g) + v - memo.rank(f)));
        if fires {
            forced += ctx.assign_upward(f, c);
        }
    }
    forced
}

fn intersection_forcing(ctx: &mut SearchContext, c: Level) -> usize {
    let memo = ctx.memo;
    let mut total = 0;
    loop {
        let assigned: Vec<usize> = ctx.state.assigned().collect();
        let mut forced = 0;
        for (a, &f) in assigned.iter().enumerate() {
            for &g in &assigned[a + 1..] {
                let meet = memo.meet(f, g);
                if ctx.state.is_assigned(meet) {
                    continue;
                }
                let bound = ctx.assigned_level(f) + ctx.assigned_level(g) + memo.delta(f, g)
                    - ctx.assigned_level(memo.join(f, g));
                if bound == c {
                    forced += ctx.assign_upward(meet, c);
                }
            }
        }
        if forced == 0 {
            return total;
        }
        total += forced;
    }
}

/// Build the choice graph for level `c`.
///
/// Vertex v of the result stands for flat `graph.label(v)`; labels ascend.
pub fn choice_graph(ctx: &SearchContext, c: Level) -> UndirectedGraph {
    let memo = ctx.memo;
    let mut deleted = vec![false; memo.num_flats()];
    for f in ctx.state.assigned() {
        deleted[f] = true;
    }

    for f in ctx.state.assigned() {
        let mu_f = ctx.assigned_level(f);
        for g in ctx.state.unassigned() {
            if deleted[g] {
                continue;
            }
            let k = mu_f + c + memo.delta(f, g) - ctx.assigned_level(memo.join(f, g));
            if k < c || (k == c && !memo.mask(g).is_subset_of(memo.mask(f))) {
                deleted[g] = true;
            }
        }
    }

    let candidates: Vec<usize> = (0..memo.num_flats()).filter(|&i| !deleted[i]).collect();
    let mut graph = UndirectedGraph::with_labels(candidates.clone());
    for (u, &f) in candidates.iter().enumerate() {
        for (v, &g) in candidates.iter().enumerate().skip(u + 1) {
            if memo.mask(f).is_comparable(memo.mask(g)) {
                graph.add_edge(u, v);
                continue;
            }
            let mu_union = ctx.level(memo.join(f, g)).unwrap_or(c);
            if 2 * c + memo.delta(f, g) - mu_union <= c {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}
