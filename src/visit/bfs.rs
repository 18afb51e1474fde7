use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::trace;

use crate::{
    core::{Label, VertexId},
    graph::Graph,
};

use super::{VisitSet, Visitor};

/// A vertex reached by the breadth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Discovery {
    /// The discovered vertex.
    pub vertex: VertexId,
    /// Number of edges between the root of the traversal and the vertex.
    pub distance: usize,
    /// The vertex from which this one was discovered, `None` for the root.
    pub parent: Option<VertexId>,
}

impl Discovery {
    /// The discovery edge as `(parent, vertex)`, or `None` for the root.
    pub fn edge(&self) -> Option<(VertexId, VertexId)> {
        self.parent.map(|parent| (parent, self.vertex))
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Breadth-first traversal state.
///
/// The set of visited vertices survives between calls to [`Bfs::start`].
/// Starting from every not yet visited vertex in turn therefore covers each
/// connected component exactly once.
pub struct Bfs<S = FixedBitSet> {
    visited: S,
    queue: VecDeque<Discovery>,
}

/// Traversal from a single root, returned from [`Bfs::start`].
pub struct BfsRooted<'a, S> {
    raw: &'a mut Bfs<S>,
}

impl Bfs {
    pub fn new<T>(graph: &Graph<T>) -> Self {
        Self::with_visit_set(FixedBitSet::with_capacity(graph.vertex_count()))
    }
}

impl<S> Bfs<S>
where
    S: VisitSet,
{
    /// Creates the traversal with a custom visited set.
    ///
    /// A hash-based set is a better fit than the default bit set when the
    /// traversal is likely to stop early in a large graph.
    pub fn with_visit_set(visited: S) -> Self {
        Self {
            visited,
            queue: VecDeque::new(),
        }
    }

    /// Starts the traversal from given root.
    ///
    /// If the root was already visited by a previous traversal, nothing is
    /// discovered.
    pub fn start(&mut self, root: VertexId) -> BfsRooted<'_, S> {
        self.queue.clear();

        if self.visited.visit(root) {
            self.queue.push_back(Discovery {
                vertex: root,
                distance: 0,
                parent: None,
            });
        }

        BfsRooted { raw: self }
    }

    pub fn reset(&mut self) {
        self.visited.reset_visited();
        self.queue.clear();
    }

    pub fn visited(&self) -> &S {
        &self.visited
    }
}

impl<T, S> Visitor<Graph<T>> for BfsRooted<'_, S>
where
    T: Label,
    S: VisitSet,
{
    type Item = Discovery;

    fn visit_next(&mut self, graph: &Graph<T>) -> Option<Self::Item> {
        let current = self.raw.queue.pop_front()?;

        for &next in graph.neighbor_ids(current.vertex) {
            // Marking on enqueue keeps a vertex reachable through several
            // frontier vertices from being queued more than once.
            if self.raw.visited.visit(next) {
                trace!(
                    vertex = next.as_usize(),
                    parent = current.vertex.as_usize(),
                    distance = current.distance + 1,
                    "vertex discovered"
                );

                self.raw.queue.push_back(Discovery {
                    vertex: next,
                    distance: current.distance + 1,
                    parent: Some(current.vertex),
                });
            }
        }

        Some(current)
    }
}
