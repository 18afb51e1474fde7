//! Extract a [spanning forest] of a graph.
//!
//! Every connected component contributes the edges through which its vertices
//! were first discovered by a breadth-first search from its first vertex. The
//! result is a spanning tree when the graph is connected.
//!
//! # Examples
//!
//! ```
//! use undigraph::{Graph, Pair};
//!
//! let graph = Graph::from_pairs([("a", "b"), ("b", "c"), ("c", "a")].map(Pair::from));
//! let tree = graph.compute_spanning_tree();
//!
//! assert_eq!(tree.vertex_count(), 3);
//! assert_eq!(tree.edge_count(), 2);
//! assert!(tree.is_connected());
//! assert!(!tree.has_cycle());
//! ```
//!
//! [spanning forest]: https://en.wikipedia.org/wiki/Spanning_tree

use tracing::{debug, instrument};

use crate::{
    core::{Edge, Label},
    graph::Graph,
};

use super::forest::walk_components;

/// Spanning forest of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct SpanningForest<T> {
    edges: Vec<Edge<T>>,
    component_count: usize,
}

impl<T: Label> SpanningForest<T> {
    pub fn on(graph: &Graph<T>) -> SpanningForestBuilder<'_, T> {
        SpanningForestBuilder { graph }
    }

    /// Edges of the forest, oriented from the discovering vertex to the
    /// discovered one, grouped by component.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Number of trees in the forest, equal to the number of connected
    /// components of the original graph.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` if the forest is a single tree.
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Builds a new graph from the forest edges.
    ///
    /// Uses [`Graph::from_edges`], because the edges are already distinct.
    /// A component without any edge (a lone vertex with a self-loop) has no
    /// forest edge and so does not appear in the resulting graph.
    pub fn into_graph(self) -> Graph<T> {
        Graph::from_edges(self.edges)
    }
}

/// Builder for [`SpanningForest`].
pub struct SpanningForestBuilder<'a, T> {
    graph: &'a Graph<T>,
}

impl<T: Label> SpanningForestBuilder<'_, T> {
    #[instrument(skip_all)]
    pub fn run(self) -> SpanningForest<T> {
        let graph = self.graph;
        let mut edges = Vec::with_capacity(graph.vertex_count());

        let component_count = walk_components(graph, |_, discovery| {
            if let Some((parent, vertex)) = discovery.edge() {
                edges.push(Edge::new(
                    graph.vertices()[parent.as_usize()].clone(),
                    graph.vertices()[vertex.as_usize()].clone(),
                ));
            }
        });

        debug!(
            components = component_count,
            edges = edges.len(),
            "spanning forest extracted"
        );

        SpanningForest {
            edges,
            component_count,
        }
    }
}

/// Returns the spanning forest of the graph as a new graph.
pub fn spanning_forest<T: Label>(graph: &Graph<T>) -> Graph<T> {
    SpanningForest::on(graph).run().into_graph()
}
