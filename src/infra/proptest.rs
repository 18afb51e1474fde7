use proptest::{arbitrary::any, collection::vec, sample::Index, strategy::Strategy};

use crate::{core::Pair, graph::Graph};

/// Relation lists over labels `0..label_bound` with at most `max_len` pairs.
///
/// Self-loops are left out.
pub fn pairs(label_bound: u8, max_len: usize) -> impl Strategy<Value = Vec<Pair<u8>>> {
    vec((0..label_bound, 0..label_bound), 0..=max_len).prop_map(|raw| {
        raw.into_iter()
            .filter(|(u, v)| u != v)
            .map(Pair::from)
            .collect()
    })
}

/// Graphs built from [`pairs`].
pub fn graph_from_pairs(label_bound: u8, max_len: usize) -> impl Strategy<Value = Graph<u8>> {
    pairs(label_bound, max_len).prop_map(|pairs| Graph::from_pairs(pairs))
}

/// Connected graphs on labels `0..vertex_count`.
///
/// A random tree is laid first, with every vertex attached to a smaller one,
/// and up to `max_extra` random pairs follow.
pub fn connected_graph_from_pairs(
    vertex_count: u8,
    max_extra: usize,
) -> impl Strategy<Value = Graph<u8>> {
    let n = vertex_count.max(2);

    (vec(any::<Index>(), usize::from(n - 1)), pairs(n, max_extra)).prop_map(
        |(parents, extra)| {
            let tree = parents.into_iter().zip(1u8..).map(|(parent, child)| {
                let parent = parent.index(usize::from(child)) as u8;
                Pair::new(parent, child)
            });

            Graph::from_pairs(tree.chain(extra))
        },
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::testing::{check_consistency, check_distinct_edges};

    use super::*;

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_generated_graphs_consistent(graph in graph_from_pairs(16, 32)) {
            prop_assert!(check_consistency(&graph).is_ok());
            prop_assert!(check_distinct_edges(&graph).is_ok());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_connected_strategy(graph in connected_graph_from_pairs(12, 8)) {
            prop_assert_eq!(graph.vertex_count(), 12);
            prop_assert!(graph.is_connected());
        }
    }
}
