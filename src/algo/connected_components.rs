//! Find [connected] components in a graph.
//!
//! # Examples
//!
//! ```
//! use undigraph::{algo::ConnectedComponents, Graph, Pair};
//!
//! let graph = Graph::from_pairs([("a", "b"), ("c", "d"), ("b", "e")].map(Pair::from));
//!
//! let components = ConnectedComponents::on(&graph).run();
//! assert_eq!(components.len(), 2);
//! assert_eq!(graph.num_connected_components(), 2);
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Component_(graph_theory)

use tracing::{debug, instrument};

use crate::{
    core::{Label, Vertex},
    graph::Graph,
};

use super::forest::walk_components;

/// Connected components of a graph.
///
/// Components are ordered by their first vertex in the graph's vertex order,
/// and members of a component are in the order of their discovery.
#[derive(Debug)]
pub struct ConnectedComponents<T> {
    components: Vec<Vec<Vertex<T>>>,
}

impl<T: Label> ConnectedComponents<T> {
    pub fn on(graph: &Graph<T>) -> ConnectedComponentsBuilder<'_, T> {
        ConnectedComponentsBuilder { graph }
    }
}

impl<T> ConnectedComponents<T> {
    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> impl Iterator<Item = &[Vertex<T>]> + '_ {
        self.components.iter().map(|component| component.as_slice())
    }

    /// Returns the component containing given vertex.
    pub fn component_of(&self, vertex: &Vertex<T>) -> Option<&[Vertex<T>]>
    where
        T: PartialEq,
    {
        self.iter().find(|component| component.contains(vertex))
    }
}

/// Builder for [`ConnectedComponents`].
pub struct ConnectedComponentsBuilder<'a, T> {
    graph: &'a Graph<T>,
}

impl<T: Label> ConnectedComponentsBuilder<'_, T> {
    #[instrument(skip_all)]
    pub fn run(self) -> ConnectedComponents<T> {
        let graph = self.graph;
        let mut components: Vec<Vec<Vertex<T>>> = Vec::new();

        walk_components(graph, |component, discovery| {
            if component == components.len() {
                components.push(Vec::new());
            }

            components[component].push(graph.vertices()[discovery.vertex.as_usize()].clone());
        });

        debug!(components = components.len(), "connected components collected");

        ConnectedComponents { components }
    }
}

/// Returns the number of connected components. Zero for the empty graph.
pub fn num_connected_components<T: Label>(graph: &Graph<T>) -> usize {
    let count = walk_components(graph, |_, _| {});
    debug!(components = count, "connected components counted");
    count
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::Pair,
        infra::{
            proptest::graph_from_pairs,
            testing::{create_complete, create_path, to_petgraph},
        },
    };

    use super::*;

    fn v<T>(label: T) -> Vertex<T> {
        Vertex::new(label)
    }

    #[test]
    fn single_component() {
        let graph = create_path(5);
        assert_eq!(num_connected_components(&graph), 1);

        let graph = create_complete(4);
        assert_eq!(num_connected_components(&graph), 1);
    }

    #[test]
    fn components_grouped() {
        let graph = Graph::from_pairs([(1, 2), (3, 4), (5, 3), (6, 7), (2, 8)].map(Pair::from));

        let components = ConnectedComponents::on(&graph).run();
        let groups = components
            .iter()
            .map(|component| component.iter().map(|v| *v.label()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(groups, vec![vec![1, 2, 8], vec![3, 4, 5], vec![6, 7]]);
        assert_eq!(components.len(), num_connected_components(&graph));
        assert_eq!(components.component_of(&v(5)), Some(&[v(3), v(4), v(5)][..]));
        assert_eq!(components.component_of(&v(9)), None);
    }

    #[test]
    fn empty() {
        let graph = Graph::<u32>::new();

        assert_eq!(num_connected_components(&graph), 0);
        assert!(ConnectedComponents::on(&graph).run().is_empty());
    }

    #[test]
    fn self_loop_is_own_component() {
        let graph = Graph::from_pairs([("a", "a"), ("b", "c")].map(Pair::from));
        assert_eq!(num_connected_components(&graph), 2);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_count_agrees_with_petgraph(graph in graph_from_pairs(24, 32)) {
            let expected = petgraph::algo::connected_components(&to_petgraph(&graph));
            prop_assert_eq!(num_connected_components(&graph), expected);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_components_partition_vertices(graph in graph_from_pairs(24, 32)) {
            let components = ConnectedComponents::on(&graph).run();
            let total = components.iter().map(|component| component.len()).sum::<usize>();
            prop_assert_eq!(total, graph.vertex_count());
        }
    }
}
