//! Breadth-first traversal shared by all structural queries.
//!
//! The traversal is **iterative**, so it is not limited by the size of the
//! program stack, and lazy, so a query can stop as soon as it has its answer.
//! A vertex is marked as visited when it is enqueued, never when it is
//! dequeued, which guarantees that every vertex is discovered at most once.
//!
//! Neighbors are discovered in the order in which they are stored in the
//! adjacency list, that is, in construction order. The traversal of a given
//! graph is therefore deterministic.

pub mod bfs;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::{Bfs, Discovery},
    visit_set::VisitSet,
};

/// Trait for a specific graph traversal approach.
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The visitor doesn't hold a reference to the graph, so its state can be
    /// kept and reused independently of the graph borrow.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<V, G> Iterator for IntoIter<'_, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
