mod common;

use common::{petgraph_from, random_pairs, undigraph_random, RANDOM_SEED};
use fastrand::Rng;
use undigraph::{Graph, Vertex};

fn main() {
    divan::main();
}

// Average degree is twice the ratio of pairs to vertices.
#[divan::bench(consts = [100, 1000, 10000], args = [1, 4])]
fn undigraph_from_pairs<const N: u32>(bencher: divan::Bencher, ratio: usize) {
    let pairs = random_pairs(N, N as usize * ratio, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Graph::from_pairs(pairs.iter().cloned()));
}

#[divan::bench(consts = [100, 1000, 10000], args = [1, 4])]
fn undigraph_shortest_path_length<const N: u32>(bencher: divan::Bencher, ratio: usize) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = undigraph_random(N, N as usize * ratio, &mut rng);
    let u = Vertex::new(rng.u32(0..N));
    let v = Vertex::new(rng.u32(0..N));

    bencher.bench(|| graph.shortest_path_length(&u, &v));
}

#[divan::bench(consts = [100, 1000, 10000], args = [1, 4])]
fn undigraph_connected_components<const N: u32>(bencher: divan::Bencher, ratio: usize) {
    let graph = undigraph_random(N, N as usize * ratio, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.num_connected_components());
}

#[divan::bench(consts = [100, 1000, 10000], args = [1, 4])]
fn petgraph_connected_components<const N: u32>(bencher: divan::Bencher, ratio: usize) {
    let pairs = random_pairs(N, N as usize * ratio, &mut Rng::with_seed(RANDOM_SEED));
    let graph = petgraph_from(&pairs);

    bencher.bench(|| petgraph::algo::connected_components(&graph));
}

#[divan::bench(consts = [100, 1000, 10000], args = [1, 4])]
fn undigraph_has_cycle<const N: u32>(bencher: divan::Bencher, ratio: usize) {
    let graph = undigraph_random(N, N as usize * ratio, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.has_cycle());
}

#[divan::bench(consts = [100, 1000, 10000], args = [1, 4])]
fn undigraph_spanning_tree<const N: u32>(bencher: divan::Bencher, ratio: usize) {
    let graph = undigraph_random(N, N as usize * ratio, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.compute_spanning_tree());
}
