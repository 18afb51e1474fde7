#![allow(dead_code)]

use fastrand::Rng;
use undigraph::{Graph, Pair};

pub const RANDOM_SEED: u64 = 0x5d0e1b9c44a7f3e2;

/// Relation list of `pair_count` random pairs over labels `0..vertex_bound`.
pub fn random_pairs(vertex_bound: u32, pair_count: usize, rng: &mut Rng) -> Vec<Pair<u32>> {
    (0..pair_count)
        .map(|_| Pair::new(rng.u32(0..vertex_bound), rng.u32(0..vertex_bound)))
        .collect()
}

pub fn undigraph_random(vertex_bound: u32, pair_count: usize, rng: &mut Rng) -> Graph<u32> {
    Graph::from_pairs(random_pairs(vertex_bound, pair_count, rng))
}

pub fn petgraph_from(pairs: &[Pair<u32>]) -> petgraph::graph::UnGraph<(), ()> {
    petgraph::graph::UnGraph::from_edges(pairs.iter().map(|pair| (pair.first, pair.second)))
}
