use std::{fmt, hash::Hash};

/// Requirements on the values that identify vertices.
///
/// Implemented for any type that is clonable and has structural equality
/// with a consistent hash.
pub trait Label: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Label for T {}

/// A vertex of a graph, identified by its label.
///
/// Two vertices are equal if and only if their labels are equal. Cloning a
/// vertex clones the label, so a copy never aliases the original.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex<T> {
    label: T,
}

impl<T> Vertex<T> {
    pub fn new(label: T) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &T {
        &self.label
    }

    pub fn into_label(self) -> T {
        self.label
    }
}

impl<T> From<T> for Vertex<T> {
    fn from(label: T) -> Self {
        Self::new(label)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}
