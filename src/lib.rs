//! Undirected, unweighted graphs over labelled vertices.
//!
//! A [`Graph`] is built once from a list of relations and then answers
//! reachability, distance, connectivity, cycle and spanning forest queries.
//!
//! ```
//! use undigraph::{prelude::*, Graph, Pair, Vertex};
//!
//! let graph = Graph::from_pairs(
//!     [("A", "B"), ("A", "C"), ("B", "C"), ("D", "E")].map(Pair::from),
//! );
//!
//! let (a, c, d) = (Vertex::new("A"), Vertex::new("C"), Vertex::new("D"));
//!
//! assert_eq!(graph.shortest_path_length(&a, &c), Some(1));
//! assert!(!graph.path_exists(&a, &d));
//! assert_eq!(graph.num_connected_components(), 2);
//! assert!(graph.has_cycle());
//!
//! let forest = SpanningForest::on(&graph).run();
//! assert_eq!(forest.edges().len(), 3);
//! assert_eq!(forest.component_count(), 2);
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use crate::{
    core::{Edge, Pair, UnknownVertexError, Vertex, VertexId},
    graph::Graph,
};

pub mod prelude {
    pub use crate::{
        algo::{Connected, ConnectedComponents, Cyclic, Distances, SpanningForest},
        visit::Visitor,
    };
}
