//! Check whether a graph or a pair of vertices is [connected].
//!
//! # Examples
//!
//! ```
//! use undigraph::{algo::Connected, Graph, Pair, Vertex};
//!
//! let graph = Graph::from_pairs([("a", "b"), ("c", "d")].map(Pair::from));
//!
//! assert!(!Connected::on(&graph).run().is());
//!
//! let (a, b) = (Vertex::new("a"), Vertex::new("b"));
//! assert!(Connected::on(&graph).between(&a, &b).run().is());
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

use tracing::{debug, instrument};

use crate::{
    core::{Label, Vertex},
    graph::Graph,
};

use super::{connected_components::ConnectedComponents, shortest_paths::shortest_path_length};

/// Result of a connectivity check.
#[derive(Debug)]
pub struct Connected<T> {
    is: bool,
    disconnected_any: Option<(Vertex<T>, Vertex<T>)>,
}

impl<T> Connected<T> {
    pub fn is(&self) -> bool {
        self.is
    }

    /// Two vertices without a path between them, if there are any.
    ///
    /// The empty graph is not connected, yet it has no such pair.
    pub fn disconnected_any(&self) -> Option<(&Vertex<T>, &Vertex<T>)> {
        self.disconnected_any.as_ref().map(|(u, v)| (u, v))
    }
}

impl<T: Label> Connected<T> {
    pub fn on(graph: &Graph<T>) -> ConnectedBuilder<'_, T> {
        ConnectedBuilder {
            graph,
            between: None,
        }
    }
}

/// Builder for [`Connected`].
pub struct ConnectedBuilder<'a, T> {
    graph: &'a Graph<T>,
    between: Option<(&'a Vertex<T>, &'a Vertex<T>)>,
}

impl<'a, T: Label> ConnectedBuilder<'a, T> {
    /// Narrows the connectivity check to only these two vertices.
    pub fn between(self, from: &'a Vertex<T>, to: &'a Vertex<T>) -> Self {
        Self {
            between: Some((from, to)),
            ..self
        }
    }

    #[instrument(skip_all)]
    pub fn run(self) -> Connected<T> {
        match self.between {
            Some((from, to)) => {
                let is = shortest_path_length(self.graph, from, to).is_some();

                Connected {
                    is,
                    disconnected_any: (!is).then(|| (from.clone(), to.clone())),
                }
            }
            None => {
                let components = ConnectedComponents::on(self.graph).run();
                debug!(components = components.len(), "connectivity checked");

                let mut firsts = components
                    .iter()
                    .filter_map(|component| component.first().cloned());

                let disconnected_any = match (firsts.next(), firsts.next()) {
                    (Some(u), Some(v)) => Some((u, v)),
                    _ => None,
                };

                Connected {
                    is: components.len() == 1,
                    disconnected_any,
                }
            }
        }
    }
}

/// Returns `true` if the graph consists of exactly one connected component.
///
/// The empty graph has no components and so is not connected.
pub fn is_connected<T: Label>(graph: &Graph<T>) -> bool {
    super::num_connected_components(graph) == 1
}

/// Returns `true` if there is a path between `u` and `v`.
///
/// Answered by the same search as [`shortest_path_length`], so the two always
/// agree.
pub fn path_exists<T: Label>(graph: &Graph<T>, u: &Vertex<T>, v: &Vertex<T>) -> bool {
    shortest_path_length(graph, u, v).is_some()
}
