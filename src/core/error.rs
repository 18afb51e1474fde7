use thiserror::Error;

use super::vertex::Vertex;

/// A query referred to a vertex that is not part of the graph.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("vertex does not exist")]
pub struct UnknownVertexError<T>(pub Vertex<T>);

impl<T> UnknownVertexError<T> {
    pub fn vertex(&self) -> &Vertex<T> {
        &self.0
    }
}
