//! Dense integer identifiers of vertices inside a [`Graph`](crate::Graph).
//!
//! Vertices are numbered `0..n` in the order they were first seen during
//! construction. The numbering is what the traversal internals operate on,
//! so that visited sets can be plain bit sets and adjacency can be indexed
//! directly instead of hashed.

/// Identifier of a vertex within a single graph.
///
/// An id is meaningful only for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Converts an `usize` into the corresponding id.
    pub fn from_usize(index: usize) -> Self {
        Self(index)
    }

    /// Converts the id into the corresponding `usize`.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self::from_usize(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.as_usize()
    }
}
