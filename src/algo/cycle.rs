//! Detect a [cycle] in a graph.
//!
//! A spanning forest of a graph with `n` vertices and `c` connected components
//! has exactly `n - c` edges. The graph has a cycle if and only if it has more
//! edges than that, because every extra edge closes a cycle with the forest.
//!
//! # Examples
//!
//! ```
//! use undigraph::{algo::Cyclic, Graph, Pair};
//!
//! let graph = Graph::from_pairs([("a", "b"), ("b", "c"), ("c", "d")].map(Pair::from));
//! assert!(!graph.has_cycle());
//!
//! let graph = Graph::from_pairs([("a", "b"), ("b", "c"), ("c", "a")].map(Pair::from));
//! let cyclic = Cyclic::on(&graph).run();
//!
//! assert!(cyclic.is());
//! assert_eq!(cyclic.forest_edge_count(), 2);
//! assert_eq!(cyclic.excess_edge_count(), 1);
//! ```
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::{
    core::{Edge, Label},
    graph::Graph,
};

use super::forest::walk_components;

/// Result of a cycle check.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct Cyclic<'a, T> {
    graph: &'a Graph<T>,
    forest: Vec<Edge<T>>,
}

impl<'a, T: Label> Cyclic<'a, T> {
    pub fn on(graph: &'a Graph<T>) -> CyclicBuilder<'a, T> {
        CyclicBuilder { graph }
    }

    /// Returns `true` if the graph has a cycle.
    pub fn is(&self) -> bool {
        self.forest.len() < self.graph.edge_count()
    }

    /// Number of edges in a spanning forest of the graph.
    pub fn forest_edge_count(&self) -> usize {
        self.forest.len()
    }

    /// Number of edges of the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of edges beyond what a forest would need. Each of them closes a
    /// cycle.
    pub fn excess_edge_count(&self) -> usize {
        self.edge_count().saturating_sub(self.forest.len())
    }

    /// Returns an edge of the graph that closes a cycle, or `None` if the graph
    /// is acyclic.
    ///
    /// This is the first edge, in the graph's edge order, that is not used by
    /// the spanning forest found during the check.
    pub fn closing_edge(&self) -> Option<&'a Edge<T>> {
        if !self.is() {
            return None;
        }

        // Multiset, because a graph built from edges may hold the same edge
        // more than once.
        let mut unused = FxHashMap::<&Edge<T>, usize>::default();
        for edge in self.forest.iter() {
            *unused.entry(edge).or_default() += 1;
        }

        self.graph.edges().iter().find(|edge| match unused.get_mut(edge) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
    }
}

/// Builder for [`Cyclic`].
pub struct CyclicBuilder<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T: Label> CyclicBuilder<'a, T> {
    #[instrument(skip_all)]
    pub fn run(self) -> Cyclic<'a, T> {
        let graph = self.graph;
        let mut forest = Vec::new();

        let components = walk_components(graph, |_, discovery| {
            if let Some((parent, vertex)) = discovery.edge() {
                forest.push(Edge::new(
                    graph.vertices()[parent.as_usize()].clone(),
                    graph.vertices()[vertex.as_usize()].clone(),
                ));
            }
        });

        debug!(
            components,
            forest_edges = forest.len(),
            edges = graph.edge_count(),
            "cycle check finished"
        );

        Cyclic { graph, forest }
    }
}

/// Returns `true` if the graph has a cycle.
pub fn has_cycle<T: Label>(graph: &Graph<T>) -> bool {
    Cyclic::on(graph).run().is()
}
