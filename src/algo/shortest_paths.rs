//! Hop distances between vertices, found by breadth-first search.
//!
//! The graph is unweighted, so the length of a path is the number of its
//! edges and the first discovery of a vertex during the traversal is along a
//! shortest path.
//!
//! # Examples
//!
//! ```
//! use undigraph::{algo::Distances, Graph, Pair, Vertex};
//!
//! let graph = Graph::from_pairs(
//!     [("Prague", "Vienna"), ("Vienna", "Munich"), ("Munich", "Florence")].map(Pair::from),
//! );
//!
//! let prague = Vertex::new("Prague");
//! let florence = Vertex::new("Florence");
//!
//! assert_eq!(graph.shortest_path_length(&prague, &florence), Some(3));
//!
//! let distances = Distances::on(&graph).run(&florence);
//! assert_eq!(distances.dist(&Vertex::new("Vienna")), Some(2));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument};

use crate::{
    core::{Label, Vertex, VertexId},
    graph::Graph,
    visit::{Bfs, Visitor},
};

/// Hop distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct Distances<'a, T> {
    graph: &'a Graph<T>,
    source: Vertex<T>,
    // Using HashMap because the search supports early termination when
    // reaching given goal, so usually only a part of the graph is covered.
    dist: FxHashMap<VertexId, usize>,
    reached: Vec<VertexId>,
}

impl<'a, T: Label> Distances<'a, T> {
    pub fn on(graph: &'a Graph<T>) -> DistancesBuilder<'a, T> {
        DistancesBuilder { graph, goal: None }
    }

    /// Source vertex where the search was started.
    pub fn source(&self) -> &Vertex<T> {
        &self.source
    }

    /// Returns the number of edges on a shortest path from the source to the
    /// given vertex, or `None` if it's not known.
    ///
    /// The distance is not known if (1) the vertices are not connected, (2)
    /// either of them is not part of the graph, or (3) the
    /// [goal](DistancesBuilder::goal) was reached before the given vertex.
    pub fn dist(&self, to: &Vertex<T>) -> Option<usize> {
        let id = self.graph.vertex_id(to)?;
        self.dist.get(&id).copied()
    }

    /// Returns the number of vertices reached from the source, the source
    /// included.
    pub fn reached_count(&self) -> usize {
        self.reached.len()
    }

    /// Iterates over the reached vertices with their distances, in the order
    /// of discovery.
    pub fn iter(&self) -> impl Iterator<Item = (&Vertex<T>, usize)> + '_ {
        self.reached.iter().map(|id| {
            let vertex = &self.graph.vertices()[id.as_usize()];
            (vertex, self.dist[id])
        })
    }
}

/// Builder for [`Distances`].
pub struct DistancesBuilder<'a, T> {
    graph: &'a Graph<T>,
    goal: Option<VertexId>,
}

impl<'a, T: Label> DistancesBuilder<'a, T> {
    /// Stops the search as soon as the goal vertex is reached.
    ///
    /// A goal that is not part of the graph is never reached, so the search
    /// covers everything reachable from the source.
    pub fn goal(self, goal: &Vertex<T>) -> Self {
        Self {
            goal: self.graph.vertex_id(goal),
            ..self
        }
    }

    /// Runs the search from given source.
    ///
    /// A source that is not part of the graph reaches nothing.
    #[instrument(skip_all)]
    pub fn run(self, source: &Vertex<T>) -> Distances<'a, T> {
        let mut dist = FxHashMap::default();
        let mut reached = Vec::new();

        if let Some(start) = self.graph.vertex_id(source) {
            let mut traversal = Bfs::with_visit_set(FxHashSet::<VertexId>::default());

            for discovery in traversal.start(start).into_iter(self.graph) {
                dist.insert(discovery.vertex, discovery.distance);
                reached.push(discovery.vertex);

                if Some(discovery.vertex) == self.goal {
                    break;
                }
            }
        }

        debug!(reached = reached.len(), "distances computed");

        Distances {
            graph: self.graph,
            source: source.clone(),
            dist,
            reached,
        }
    }
}

/// Returns the number of edges on a shortest path between `u` and `v`, or
/// `None` if there is no such path.
///
/// The distance of a vertex to itself is always zero. Otherwise, a vertex that
/// is not part of the graph has no path to anything.
pub fn shortest_path_length<T: Label>(
    graph: &Graph<T>,
    u: &Vertex<T>,
    v: &Vertex<T>,
) -> Option<usize> {
    if u == v {
        return Some(0);
    }

    Distances::on(graph).goal(v).run(u).dist(v)
}
