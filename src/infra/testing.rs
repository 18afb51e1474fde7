use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{
    core::{Label, Pair},
    graph::Graph,
};

/// Path `0 - 1 - ... - (n - 1)`, built from pairs in this order.
///
/// A graph can't hold a vertex without an edge, so paths with fewer than two
/// vertices are empty.
pub fn create_path(vertex_count: usize) -> Graph<usize> {
    Graph::from_pairs((1..vertex_count).map(|v| Pair::new(v - 1, v)))
}

/// Cycle `0 - 1 - ... - (n - 1) - 0`, built from pairs in this order.
pub fn create_cycle(vertex_count: usize) -> Graph<usize> {
    let closing = (vertex_count > 0).then(|| Pair::new(vertex_count - 1, 0));
    Graph::from_pairs(
        (1..vertex_count)
            .map(|v| Pair::new(v - 1, v))
            .chain(closing),
    )
}

/// Complete graph on `0..n`, built from pairs `(u, v)` with `u < v` in
/// lexicographic order.
pub fn create_complete(vertex_count: usize) -> Graph<usize> {
    Graph::from_pairs(
        (0..vertex_count)
            .flat_map(|u| (u + 1..vertex_count).map(move |v| Pair::new(u, v))),
    )
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex at position {0} is equal to an earlier vertex")]
    DuplicateVertex(usize),
    #[error("vertex at position {0} is not found by its label")]
    VertexLookupMismatch(usize),
    #[error("edge at position {0} has an endpoint that is not a vertex of the graph")]
    EdgeEndpointAbsent(usize),
    #[error("edge at position {0} is equal to an earlier edge")]
    DuplicateEdge(usize),
    #[error("vertex {0} lists vertex {1} {2} times, but vertex {1} lists vertex {0} {3} times")]
    AsymmetricAdjacency(usize, usize, usize, usize),
    #[error("sum of degrees ({0}) is odd")]
    DegreeSumOdd(usize),
    #[error("sum of degrees ({0}) is less than doubled edge count ({1})")]
    DegreeSumTooSmall(usize, usize),
}

/// Checks the invariants every graph upholds regardless of its constructor.
pub fn check_consistency<T: Label>(graph: &Graph<T>) -> Result<(), ConsistencyCheckError> {
    let mut seen = FxHashSet::default();

    for (i, vertex) in graph.vertices().iter().enumerate() {
        if !seen.insert(vertex) {
            return Err(ConsistencyCheckError::DuplicateVertex(i));
        }

        if graph.vertex_id(vertex).map(|id| id.as_usize()) != Some(i) {
            return Err(ConsistencyCheckError::VertexLookupMismatch(i));
        }
    }

    for (i, edge) in graph.edges().iter().enumerate() {
        if !graph.contains_vertex(edge.u()) || !graph.contains_vertex(edge.v()) {
            return Err(ConsistencyCheckError::EdgeEndpointAbsent(i));
        }
    }

    let counts = graph
        .vertex_ids()
        .map(|id| {
            let mut counts = FxHashMap::<usize, usize>::default();
            for neighbor in graph.neighbor_ids(id) {
                *counts.entry(neighbor.as_usize()).or_default() += 1;
            }
            counts
        })
        .collect::<Vec<_>>();

    for (v, neighbors) in counts.iter().enumerate() {
        for (&w, &count) in neighbors.iter() {
            let reverse = counts[w].get(&v).copied().unwrap_or(0);

            if reverse != count {
                return Err(ConsistencyCheckError::AsymmetricAdjacency(
                    v, w, count, reverse,
                ));
            }
        }
    }

    let deg_sum = graph
        .vertex_ids()
        .map(|id| graph.neighbor_ids(id).len())
        .sum::<usize>();

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if deg_sum % 2 != 0 {
        return Err(ConsistencyCheckError::DegreeSumOdd(deg_sum));
    }

    // Graphs built from pairs may record a repeated pair in the adjacency
    // while keeping a single edge, so only the lower bound holds in general.
    if deg_sum < 2 * graph.edge_count() {
        return Err(ConsistencyCheckError::DegreeSumTooSmall(
            deg_sum,
            2 * graph.edge_count(),
        ));
    }

    Ok(())
}

/// Checks that no two edges are equal. Holds for graphs built from pairs.
pub fn check_distinct_edges<T: Label>(graph: &Graph<T>) -> Result<(), ConsistencyCheckError> {
    let mut seen = FxHashSet::default();

    match graph.edges().iter().position(|edge| !seen.insert(edge)) {
        Some(i) => Err(ConsistencyCheckError::DuplicateEdge(i)),
        None => Ok(()),
    }
}

#[cfg(test)]
pub fn to_petgraph<T: Label>(graph: &Graph<T>) -> petgraph::graph::UnGraph<(), ()> {
    let mut result = petgraph::graph::UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());

    let nodes = graph
        .vertex_ids()
        .map(|_| result.add_node(()))
        .collect::<Vec<_>>();

    for edge in graph.edges() {
        let u = graph.vertex_id(edge.u()).unwrap();
        let v = graph.vertex_id(edge.v()).unwrap();
        result.add_edge(nodes[u.as_usize()], nodes[v.as_usize()], ());
    }

    result
}
