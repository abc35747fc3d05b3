// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical labeling of vertex-colored graphs.
//!
//! `RefinementCanonicalizer` is an individualization-refinement search:
//!
//! 1. Start from the partition of vertices by color, cells in ascending color order.
//! 2. Refine to an equitable partition: split the first cell whose vertices
//!    disagree on the multiset of neighbor cells, until no cell splits.
//! 3. If a cell is not a singleton, individualize each of its vertices in turn
//!    and recurse. Discrete partitions are leaves; a leaf labels vertex `v`
//!    with the position of its cell.
//! 4. The leaf with the lexicographically least relabeled edge list wins.
//!
//! Leaves with equal certificates yield automorphisms. Those are used to skip
//! children in the same orbit, and a leaf equal to the first leaf abandons
//! the rest of its subtree.

use super::ColoredGraph;
use std::fmt::Debug;

/// A source of canonical labelings.
///
/// `canonical_labeling` returns `label[v]`, the new position of vertex `v`.
/// Two graphs that are isomorphic by a color-preserving map must produce the
/// same relabeled graph, and lower colors must receive lower positions.
pub trait CanonicalOracle: Debug {
    fn canonical_labeling(&self, graph: &ColoredGraph) -> Vec<usize>;
}

/// Individualization-refinement canonicalizer with automorphism pruning.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefinementCanonicalizer;

impl RefinementCanonicalizer {
    pub fn new() -> Self {
        Self
    }
}

impl CanonicalOracle for RefinementCanonicalizer {
    fn canonical_labeling(&self, graph: &ColoredGraph) -> Vec<usize> {
        if graph.vertex_count() == 0 {
            return Vec::new();
        }
        let mut search = Search::new(graph);
        let root = search.refine(color_partition(graph));
        search.explore(root, &mut Vec::new());
        match search.best {
            Some(best) => best.label,
            None => panic!("Invariant failure: canonical search reached no leaf"),
        }
    }
}

/// Ordered partition of the vertex set. Every cell is kept sorted.
type Partition = Vec<Vec<usize>>;

type Certificate = Vec<(usize, usize)>;

fn color_partition(graph: &ColoredGraph) -> Partition {
    let mut vertices: Vec<usize> = (0..graph.vertex_count()).collect();
    vertices.sort_by_key(|&v| (graph.color(v), v));
    let mut cells: Partition = Vec::new();
    for v in vertices {
        match cells.last_mut() {
            Some(cell) if graph.color(cell[0]) == graph.color(v) => cell.push(v),
            _ => cells.push(vec![v]),
        }
    }
    cells
}

#[derive(Debug, Clone)]
struct Leaf {
    label: Vec<usize>,
    certificate: Certificate,
    path: Vec<usize>,
}

impl Leaf {
    /// The automorphism taking `other` onto this leaf: `v ↦ self⁻¹(other(v))`.
    fn automorphism_from(&self, other: &[usize]) -> Vec<usize> {
        let mut inverse = vec![0; self.label.len()];
        for (v, &position) in self.label.iter().enumerate() {
            inverse[position] = v;
        }
        other.iter().map(|&position| inverse[position]).collect()
    }
}

struct Search<'g> {
    graph: &'g ColoredGraph,
    first: Option<Leaf>,
    best: Option<Leaf>,
    generators: Vec<Vec<usize>>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g ColoredGraph) -> Self {
        Self {
            graph,
            first: None,
            best: None,
            generators: Vec::new(),
        }
    }

    fn cell_index(&self, cells: &Partition) -> Vec<usize> {
        let mut index = vec![0; self.graph.vertex_count()];
        for (i, cell) in cells.iter().enumerate() {
            for &v in cell {
                index[v] = i;
            }
        }
        index
    }

    /// Split cells by neighbor-cell signature until the partition is equitable.
    fn refine(&self, mut cells: Partition) -> Partition {
        'outer: loop {
            let index = self.cell_index(&cells);
            for i in 0..cells.len() {
                if cells[i].len() < 2 {
                    continue;
                }
                let mut keyed: Vec<(Vec<usize>, usize)> = cells[i]
                    .iter()
                    .map(|&v| {
                        let mut signature: Vec<usize> =
                            self.graph.neighbors(v).iter().map(|&u| index[u]).collect();
                        signature.sort_unstable();
                        (signature, v)
                    })
                    .collect();
                keyed.sort();
                if keyed.first().map(|k| &k.0) == keyed.last().map(|k| &k.0) {
                    continue;
                }

                let mut groups: Partition = Vec::new();
                let mut previous: Option<&Vec<usize>> = None;
                for (signature, v) in &keyed {
                    if previous == Some(signature) {
                        if let Some(group) = groups.last_mut() {
                            group.push(*v);
                        }
                    } else {
                        groups.push(vec![*v]);
                    }
                    previous = Some(signature);
                }
                let _ = cells.splice(i..=i, groups);
                continue 'outer;
            }
            return cells;
        }
    }

    /// Orbits of the target cell under the stored automorphisms that fix `prefix` pointwise.
    fn orbits(&self, cell: &[usize], prefix: &[usize]) -> UnionFind {
        let mut orbits = UnionFind::new(cell.len());
        for generator in &self.generators {
            if !prefix.iter().all(|&x| generator[x] == x) {
                continue;
            }
            for (i, &v) in cell.iter().enumerate() {
                if let Ok(j) = cell.binary_search(&generator[v]) {
                    orbits.union(i, j);
                }
            }
        }
        orbits
    }

    /// Depth-first search below the node reached by `prefix`.
    ///
    /// Returns `Some(depth)` to abandon every node deeper than `depth`.
    fn explore(&mut self, cells: Partition, prefix: &mut Vec<usize>) -> Option<usize> {
        let depth = prefix.len();
        let target = match cells.iter().position(|cell| cell.len() > 1) {
            Some(target) => target,
            None => return self.leaf(&cells, prefix),
        };

        let candidates = cells[target].clone();
        let mut explored: Vec<usize> = Vec::new();
        for (i, &v) in candidates.iter().enumerate() {
            if !explored.is_empty() {
                let mut orbits = self.orbits(&candidates, prefix);
                if explored.iter().any(|&j| orbits.same(i, j)) {
                    continue;
                }
            }
            explored.push(i);

            let mut child = cells.clone();
            child[target] = candidates.iter().copied().filter(|&u| u != v).collect();
            child.insert(target, vec![v]);
            let child = self.refine(child);

            prefix.push(v);
            let abort = self.explore(child, prefix);
            prefix.pop();
            if let Some(level) = abort {
                if level < depth {
                    return abort;
                }
            }
        }
        None
    }

    fn leaf(&mut self, cells: &Partition, prefix: &[usize]) -> Option<usize> {
        let label = self.cell_index(cells);
        let certificate = self.graph.relabeled_edges(&label);

        let first = match &self.first {
            Some(first) => first,
            None => {
                let leaf = Leaf {
                    label,
                    certificate,
                    path: prefix.to_vec(),
                };
                self.first = Some(leaf.clone());
                self.best = Some(leaf);
                return None;
            }
        };

        if first.certificate == certificate {
            let automorphism = first.automorphism_from(&label);
            let common = first.path.iter().zip(prefix).take_while(|(a, b)| a == b).count();
            self.generators.push(automorphism);
            return Some(common);
        }

        if let Some(best) = &self.best {
            if best.certificate == certificate {
                let automorphism = best.automorphism_from(&label);
                self.generators.push(automorphism);
                return None;
            }
            if best.certificate < certificate {
                return None;
            }
        }
        self.best = Some(Leaf {
            label,
            certificate,
            path: prefix.to_vec(),
        });
        None
    }
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra.max(rb)] = ra.min(rb);
        }
    }

    fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
