// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end extension runs on small polymatroids.

mod common;

use common::*;
use kpoly_ext::graph::RefinementCanonicalizer;
use kpoly_ext::state::Counters;
use kpoly_ext::symmetry::{canonical_deletion, canonical_label};
use kpoly_ext::{Extender, ExtensionOptions, Polymatroid};
use std::collections::HashSet;

#[test]
fn test_point_all_mode() {
    let all = extension_strings(POINT, ExtensionOptions::default().emit_all(true));
    // Loop, parallel point, free point.
    assert_eq!(all, vec!["2,0 3,1", "0,0 3,1", "0,0 1,1 2,1 3,2"]);
}

#[test]
fn test_point_deduplicated() {
    let found = extension_strings(POINT, ExtensionOptions::default());
    assert_eq!(found, vec!["0,0 3,1", "0,0 1,1 2,1 3,2"]);
}

#[test]
fn test_rank_one_pair_extensions() {
    let input = parse(RANK_ONE_PAIR);
    let extender = Extender::new(ExtensionOptions::default());
    let canonicalizer = RefinementCanonicalizer;
    let target = canonical_label(&input, &canonicalizer);

    let found = extender.extensions(&input).unwrap();
    for e in &found {
        assert_eq!(e.ground_size(), 3, "{}", e);
        assert_eq!(canonical_label(e, &canonicalizer), *e, "{} is not canonical", e);
        assert_eq!(
            canonical_deletion(e, &canonicalizer),
            target,
            "{} does not delete to the input",
            e
        );
    }

    let mut records: Vec<String> = found.iter().map(|e| e.to_string()).collect();
    records.sort();
    assert_eq!(
        records,
        vec![
            "0,0 1,1 2,1 3,1 4,1 7,2",
            "0,0 1,1 2,1 4,1 7,1 5,2 6,2",
            "0,0 5,1 6,1 7,1",
        ]
    );
}

/// Extend every record of one generation and collect the next generation.
fn next_generation(extender: &Extender, generation: &[Polymatroid]) -> Vec<Polymatroid> {
    let mut next = Vec::new();
    for p in generation {
        next.extend(extender.extensions(p).unwrap());
    }
    next
}

fn generation_counts(max_new_rank: u32, generations: usize) -> Vec<usize> {
    let extender = Extender::new(ExtensionOptions::default().max_new_rank(max_new_rank));
    let mut generation = vec![parse("0,0")];
    let mut counts = Vec::new();
    for _ in 0..generations {
        generation = next_generation(&extender, &generation);
        let distinct: HashSet<String> = generation.iter().map(|e| e.to_string()).collect();
        assert_eq!(distinct.len(), generation.len(), "two parents produced one child");
        counts.push(generation.len());
    }
    counts
}

#[test]
fn test_generations_count_matroids() {
    // Non-isomorphic matroids on 1..=5 elements.
    assert_eq!(generation_counts(1, 5), vec![2, 4, 8, 17, 38]);
}

#[test]
fn test_generations_count_two_polymatroids() {
    // Non-isomorphic 2-polymatroids on 1..=3 elements.
    assert_eq!(generation_counts(2, 3), vec![3, 10, 40]);
}

#[test]
fn test_emitted_extensions_delete_to_their_input() {
    let canonicalizer = RefinementCanonicalizer;
    for record in FIXTURES {
        let input = parse(record);
        let target = canonical_label(&input, &canonicalizer);
        let extender = Extender::new(ExtensionOptions::default().max_new_rank(2));
        for e in extender.extensions(&input).unwrap() {
            assert_eq!(e.ground_size(), input.ground_size() + 1);
            assert_eq!(canonical_deletion(&e, &canonicalizer), target, "{} from {}", e, record);
        }
    }
}

#[test]
fn test_no_duplicate_canonical_forms() {
    for record in FIXTURES {
        let found = extension_strings(record, ExtensionOptions::default().max_new_rank(2));
        let distinct: HashSet<&String> = found.iter().collect();
        assert_eq!(distinct.len(), found.len(), "duplicates among extensions of {}", record);
    }
}

#[test]
fn test_level_zero_gives_only_the_loop() {
    let all = extension_strings(POINT, ExtensionOptions::default().emit_all(true).max_new_rank(0));
    assert_eq!(all, vec!["2,0 3,1"]);

    let options = ExtensionOptions::default().emit_all(true).max_new_rank(0);
    let all = extension_strings(FREE_PAIR, options);
    assert_eq!(all, vec!["4,0 5,1 6,1 7,2"]);
}

#[test]
fn test_free_pair_all_mode() {
    let all = extension_strings(FREE_PAIR, ExtensionOptions::default().emit_all(true));
    assert_eq!(all.len(), 5);
    // The coloop raises the rank of every flat.
    assert!(all.contains(&"0,0 1,1 2,1 4,1 3,2 5,2 6,2 7,3".to_string()));
}

#[test]
fn test_total_rank_filter_keeps_rank() {
    let input = parse(FREE_PAIR);
    let options = ExtensionOptions::default().emit_all(true).max_total_rank(Some(2));
    let kept = Extender::new(options).extensions(&input).unwrap();
    assert_eq!(kept.len(), 4);
    assert!(kept.iter().all(|e| e.total_rank() <= 2));
}

#[test]
fn test_statistics_balance() {
    for record in FIXTURES {
        let input = parse(record);
        let stats = Extender::new(ExtensionOptions::default())
            .extend(&input, |_| Ok(()))
            .unwrap();
        let accounted = stats.get(Counters::Rejected)
            + stats.get(Counters::RankFiltered)
            + stats.get(Counters::DeletionMismatch)
            + stats.get(Counters::Duplicates)
            + stats.get(Counters::Emitted);
        assert_eq!(stats.get(Counters::Candidates), accounted, "{}: {}", record, stats);
    }
}
