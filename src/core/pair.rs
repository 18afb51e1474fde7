use super::vertex::Vertex;

/// One relation of the input to [`Graph::from_pairs`](crate::Graph::from_pairs).
///
/// The pair `(a, b)` describes vertices `a` and `b` joined by an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<T> {
    pub first: T,
    pub second: T,
}

impl<T> Pair<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    pub fn into_vertices(self) -> (Vertex<T>, Vertex<T>) {
        (Vertex::new(self.first), Vertex::new(self.second))
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}
