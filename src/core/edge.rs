use std::{
    fmt,
    hash::{Hash, Hasher},
};

use rustc_hash::FxHasher;

use super::vertex::Vertex;

/// An undirected edge, an unordered pair of vertices.
///
/// Equality and hashing ignore the order of the endpoints, so `Edge::new(a,
/// b)` and `Edge::new(b, a)` are the same edge. The order given at creation
/// is kept only for [`Edge::u`], [`Edge::v`] and display.
#[derive(Debug, Clone)]
pub struct Edge<T> {
    u: Vertex<T>,
    v: Vertex<T>,
}

impl<T> Edge<T> {
    pub fn new(u: Vertex<T>, v: Vertex<T>) -> Self {
        Self { u, v }
    }

    /// Creates an edge directly from the labels of its endpoints.
    pub fn between(u: T, v: T) -> Self {
        Self::new(Vertex::new(u), Vertex::new(v))
    }

    pub fn u(&self) -> &Vertex<T> {
        &self.u
    }

    pub fn v(&self) -> &Vertex<T> {
        &self.v
    }

    pub fn endpoints(&self) -> (&Vertex<T>, &Vertex<T>) {
        (&self.u, &self.v)
    }

    pub fn into_endpoints(self) -> (Vertex<T>, Vertex<T>) {
        (self.u, self.v)
    }
}

impl<T: PartialEq> Edge<T> {
    /// Returns `true` if the vertex is one of the endpoints.
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        &self.u == vertex || &self.v == vertex
    }

    /// Returns the endpoint opposite to the given one, or `None` if the
    /// vertex is not an endpoint of this edge.
    pub fn other(&self, vertex: &Vertex<T>) -> Option<&Vertex<T>> {
        if &self.u == vertex {
            Some(&self.v)
        } else if &self.v == vertex {
            Some(&self.u)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T: Hash> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Both orientations must produce the same hash, so the endpoint hashes
        // are fed in a canonical order.
        let lhs = endpoint_hash(&self.u);
        let rhs = endpoint_hash(&self.v);

        state.write_u64(lhs.min(rhs));
        state.write_u64(lhs.max(rhs));
    }
}

fn endpoint_hash<T: Hash>(vertex: &Vertex<T>) -> u64 {
    let mut hasher = FxHasher::default();
    vertex.hash(&mut hasher);
    hasher.finish()
}

impl<T> From<(Vertex<T>, Vertex<T>)> for Edge<T> {
    fn from((u, v): (Vertex<T>, Vertex<T>)) -> Self {
        Self::new(u, v)
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.u, self.v)
    }
}
