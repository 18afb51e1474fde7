//! Undirected graph over labelled vertices.
//!
//! A [`Graph`] is built in one pass, either from a list of [`Pair`]s or from
//! a list of already known [`Edge`]s, and is not mutated afterwards. All
//! structural queries in [`algo`](crate::algo) take a shared reference to it.
//!
//! # Examples
//!
//! ```
//! use undigraph::{Graph, Pair, Vertex};
//!
//! let graph = Graph::from_pairs([("a", "b"), ("b", "c"), ("c", "a")].map(Pair::from));
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.are_adjacent(&Vertex::new("a"), &Vertex::new("c")), Ok(true));
//! assert!(graph.has_cycle());
//! ```

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument};

use crate::{
    algo,
    core::{Edge, Label, Pair, UnknownVertexError, Vertex, VertexId},
};

/// Undirected, unweighted graph with labelled vertices.
///
/// * `vertices` keeps every distinct vertex in first-seen order.
/// * `edges` keeps the edges in first-seen order. Whether duplicates are
///   possible depends on the constructor, see [`Graph::from_pairs`] and
///   [`Graph::from_edges`].
/// * Adjacency is symmetric: if `w` is a neighbor of `v`, then `v` is a
///   neighbor of `w`. Every vertex has an adjacency entry.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge<T>>,
    adjacency: Vec<Vec<VertexId>>,
    ids: FxHashMap<Vertex<T>, VertexId>,
}

impl<T> Graph<T> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in the order in which they were first seen.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Edges in the order in which they were first seen.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Ids of all vertices, in the order of [`Graph::vertices`].
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::from_usize)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.as_usize())
    }

    /// Neighbor ids of a vertex in adjacency order. Empty for an id that does
    /// not belong to the graph.
    pub(crate) fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id.as_usize())
            .map_or(&[], |neighbors| neighbors.as_slice())
    }
}

impl<T: Label> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            ids: FxHashMap::default(),
        }
    }

    /// Builds the graph from a list of relations.
    ///
    /// A pair `(a, b)` adds vertices `a` and `b` (unless already present) and
    /// the edge `a-b`. Edges are deduplicated regardless of orientation, so
    /// `(a, b)` followed by `(b, a)` yields a single edge. The adjacency lists,
    /// on the other hand, record every pair, including the repeated ones.
    ///
    /// The first occurrence of a label is the canonical vertex, and both the
    /// vertex and the edge sequences keep the first-seen order.
    #[instrument(skip_all)]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let mut graph = Self::new();
        let mut seen_edges = FxHashSet::default();

        for pair in pairs {
            let (first, second) = pair.into_vertices();

            let u = graph.intern(first);
            let v = graph.intern(second);

            let edge = Edge::new(
                graph.vertices[u.as_usize()].clone(),
                graph.vertices[v.as_usize()].clone(),
            );

            if !seen_edges.contains(&edge) {
                seen_edges.insert(edge.clone());
                graph.edges.push(edge);
            }

            graph.connect(u, v);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built from pairs"
        );

        graph
    }

    /// Builds the graph from a list of edges.
    ///
    /// Unlike [`Graph::from_pairs`], the edges are **not** deduplicated: every
    /// input edge is recorded as given. Only vertices are deduplicated by their
    /// labels. This is the constructor for edge sets that are distinct by
    /// construction, such as a computed
    /// [spanning forest](crate::algo::SpanningForest).
    #[instrument(skip_all)]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<T>>,
    {
        let mut graph = Self::new();

        for edge in edges {
            let u = graph.intern(edge.u().clone());
            let v = graph.intern(edge.v().clone());

            graph.connect(u, v);
            graph.edges.push(edge);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built from edges"
        );

        graph
    }

    fn intern(&mut self, vertex: Vertex<T>) -> VertexId {
        if let Some(id) = self.ids.get(&vertex) {
            return *id;
        }

        let id = VertexId::from_usize(self.vertices.len());
        self.ids.insert(vertex.clone(), id);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        id
    }

    fn connect(&mut self, u: VertexId, v: VertexId) {
        self.adjacency[u.as_usize()].push(v);
        self.adjacency[v.as_usize()].push(u);
    }

    pub fn vertex_id(&self, vertex: &Vertex<T>) -> Option<VertexId> {
        self.ids.get(vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.ids.contains_key(vertex)
    }

    fn require(&self, vertex: &Vertex<T>) -> Result<VertexId, UnknownVertexError<T>> {
        self.vertex_id(vertex)
            .ok_or_else(|| UnknownVertexError(vertex.clone()))
    }

    /// Returns `true` if `w` is a neighbor of `v`.
    ///
    /// Fails if `v` is not a vertex of the graph. An unknown `w` is never
    /// adjacent.
    pub fn are_adjacent(
        &self,
        v: &Vertex<T>,
        w: &Vertex<T>,
    ) -> Result<bool, UnknownVertexError<T>> {
        let v = self.require(v)?;

        Ok(match self.vertex_id(w) {
            Some(w) => self.adjacency[v.as_usize()].contains(&w),
            None => false,
        })
    }

    /// Iterates over the neighbors of a vertex in adjacency order, without
    /// copying them.
    pub fn neighbors(
        &self,
        vertex: &Vertex<T>,
    ) -> Result<impl Iterator<Item = &Vertex<T>> + '_, UnknownVertexError<T>> {
        let id = self.require(vertex)?;

        Ok(self.adjacency[id.as_usize()]
            .iter()
            .map(|neighbor| &self.vertices[neighbor.as_usize()]))
    }

    /// Number of adjacency entries of a vertex. A self-loop counts twice.
    pub fn degree(&self, vertex: &Vertex<T>) -> Result<usize, UnknownVertexError<T>> {
        let id = self.require(vertex)?;
        Ok(self.adjacency[id.as_usize()].len())
    }

    /// Returns a copy of the neighbors of a vertex, in adjacency order.
    ///
    /// Returns an empty list if the vertex is not part of the graph.
    pub fn adjacency_list(&self, vertex: &Vertex<T>) -> Vec<Vertex<T>> {
        match self.vertex_id(vertex) {
            Some(id) => self.copy_neighbors(id),
            None => Vec::new(),
        }
    }

    /// Returns a copy of the whole adjacency, each list copied independently.
    ///
    /// Running time is `O(n + m)`, one copy per vertex plus one per adjacency
    /// entry.
    pub fn full_adjacency(&self) -> FxHashMap<Vertex<T>, Vec<Vertex<T>>> {
        self.vertex_ids()
            .map(|id| (self.vertices[id.as_usize()].clone(), self.copy_neighbors(id)))
            .collect()
    }

    fn copy_neighbors(&self, id: VertexId) -> Vec<Vertex<T>> {
        self.adjacency[id.as_usize()]
            .iter()
            .map(|neighbor| self.vertices[neighbor.as_usize()].clone())
            .collect()
    }

    /// See [`algo::shortest_path_length`].
    pub fn shortest_path_length(&self, u: &Vertex<T>, v: &Vertex<T>) -> Option<usize> {
        algo::shortest_path_length(self, u, v)
    }

    /// See [`algo::path_exists`].
    pub fn path_exists(&self, u: &Vertex<T>, v: &Vertex<T>) -> bool {
        algo::path_exists(self, u, v)
    }

    /// See [`algo::num_connected_components`].
    pub fn num_connected_components(&self) -> usize {
        algo::num_connected_components(self)
    }

    /// See [`algo::is_connected`].
    pub fn is_connected(&self) -> bool {
        algo::is_connected(self)
    }

    /// See [`algo::has_cycle`].
    pub fn has_cycle(&self) -> bool {
        algo::has_cycle(self)
    }

    /// See [`algo::spanning_forest`].
    pub fn compute_spanning_tree(&self) -> Graph<T> {
        algo::spanning_forest(self)
    }
}

impl<T: Label> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Label> FromIterator<Pair<T>> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = Pair<T>>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Lists the vertices, then every undirected adjacency once as `u-v`.
impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertices:\n")?;
        for vertex in self.vertices.iter() {
            write!(f, " {vertex}")?;
        }

        f.write_str("\nEdges:\n")?;
        let mut listed = FxHashSet::default();

        for (v, neighbors) in self.adjacency.iter().enumerate() {
            for w in neighbors.iter().map(VertexId::as_usize) {
                if listed.contains(&(v, w)) || listed.contains(&(w, v)) {
                    continue;
                }

                listed.insert((v, w));
                write!(f, " {}-{}", self.vertices[v], self.vertices[w])?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::{check_consistency, check_distinct_edges};

    use super::*;

    fn v<T>(label: T) -> Vertex<T> {
        Vertex::new(label)
    }

    fn pairs<T: Clone>(list: &[(T, T)]) -> Vec<Pair<T>> {
        list.iter().cloned().map(Pair::from).collect()
    }

    fn labels<T: Clone>(vertices: &[Vertex<T>]) -> Vec<T> {
        vertices.iter().map(|v| v.label().clone()).collect()
    }

    #[test]
    fn from_pairs_first_seen_order() {
        let graph = Graph::from_pairs(pairs(&[("b", "a"), ("a", "c"), ("d", "b")]));

        assert_eq!(labels(graph.vertices()), vec!["b", "a", "c", "d"]);
        assert_eq!(
            graph.edges(),
            &[
                Edge::between("b", "a"),
                Edge::between("a", "c"),
                Edge::between("d", "b")
            ]
        );
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn from_pairs_deduplicates_edges_not_adjacency() {
        let graph = Graph::from_pairs(pairs(&[("a", "b"), ("b", "a"), ("a", "b")]));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacency_list(&v("a")), vec![v("b"), v("b"), v("b")]);
        assert_eq!(graph.adjacency_list(&v("b")), vec![v("a"), v("a"), v("a")]);

        check_consistency(&graph).unwrap();
        check_distinct_edges(&graph).unwrap();
    }

    #[test]
    fn from_edges_keeps_duplicates() {
        let graph = Graph::from_edges([
            Edge::between(1, 2),
            Edge::between(2, 1),
            Edge::between(2, 3),
        ]);

        assert_eq!(labels(graph.vertices()), vec![1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);
        assert_matches!(check_distinct_edges(&graph), Err(_));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn self_loop_recorded_twice() {
        let graph = Graph::from_pairs(pairs(&[("x", "x")]));

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacency_list(&v("x")), vec![v("x"), v("x")]);
        assert_eq!(graph.degree(&v("x")), Ok(2));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn empty() {
        let graph = Graph::<&str>::from_pairs(Vec::new());

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.full_adjacency().is_empty());
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn are_adjacent_known() {
        let graph = Graph::from_pairs(pairs(&[("a", "b"), ("b", "c")]));

        assert_eq!(graph.are_adjacent(&v("a"), &v("b")), Ok(true));
        assert_eq!(graph.are_adjacent(&v("b"), &v("a")), Ok(true));
        assert_eq!(graph.are_adjacent(&v("a"), &v("c")), Ok(false));
        assert_eq!(graph.are_adjacent(&v("a"), &v("z")), Ok(false));
    }

    #[test]
    fn are_adjacent_unknown_vertex() {
        let graph = Graph::from_pairs(pairs(&[("a", "b")]));

        let result = graph.are_adjacent(&v("z"), &v("a"));
        assert_matches!(result, Err(UnknownVertexError(vertex)) if vertex == v("z"));
        assert_matches!(graph.degree(&v("z")), Err(_));
        assert!(graph.neighbors(&v("z")).is_err());
    }

    #[test]
    fn adjacency_list_unknown_is_empty() {
        let graph = Graph::from_pairs(pairs(&[("a", "b")]));
        assert!(graph.adjacency_list(&v("z")).is_empty());
    }

    #[test]
    fn full_adjacency_is_snapshot() {
        let graph = Graph::from_pairs(pairs(&[("a", "b"), ("a", "c")]));

        let mut snapshot = graph.full_adjacency();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[&v("a")], vec![v("b"), v("c")]);
        assert_eq!(snapshot[&v("c")], vec![v("a")]);

        snapshot.get_mut(&v("a")).unwrap().clear();
        snapshot.remove(&v("b"));

        assert_eq!(graph.adjacency_list(&v("a")), vec![v("b"), v("c")]);
        assert_eq!(graph.adjacency_list(&v("b")), vec![v("a")]);
    }

    #[test]
    fn neighbors_borrowed() {
        let graph = Graph::from_pairs(pairs(&[(1, 2), (1, 3), (3, 4)]));

        let neighbors = graph.neighbors(&v(1)).unwrap().cloned().collect::<Vec<_>>();
        assert_eq!(neighbors, vec![v(2), v(3)]);
        assert_eq!(graph.degree(&v(3)), Ok(2));
    }

    #[test]
    fn from_iterator() {
        let graph = [(1, 2), (2, 3)]
            .into_iter()
            .map(Pair::from)
            .collect::<Graph<_>>();

        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.contains_vertex(&v(3)));
        assert!(!graph.contains_vertex(&v(4)));
    }

    #[test]
    fn two_triangles_joined() {
        let graph = Graph::from_pairs(pairs(&[
            ("A", "B"),
            ("B", "C"),
            ("A", "C"),
            ("C", "D"),
            ("F", "E"),
            ("E", "A"),
            ("F", "G"),
            ("G", "H"),
            ("H", "F"),
        ]));

        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.edge_count(), 9);
        assert_eq!(graph.num_connected_components(), 1);
        assert!(graph.is_connected());
        assert!(graph.path_exists(&v("A"), &v("G")));
        assert_eq!(graph.shortest_path_length(&v("A"), &v("G")), Some(3));
        assert!(graph.has_cycle());

        let tree = graph.compute_spanning_tree();
        assert_eq!(tree.edge_count(), 7);
        assert!(!tree.has_cycle());

        assert_eq!(
            graph.to_string(),
            "Vertices:\n A B C D F E G H\nEdges:\n A-B A-C A-E B-C C-D F-E F-G F-H G-H"
        );
    }

    #[test]
    fn single_pair() {
        let graph = Graph::from_pairs(pairs(&[("X", "Y")]));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.num_connected_components(), 1);
        assert!(graph.is_connected());
        assert!(!graph.has_cycle());
        assert_eq!(graph.shortest_path_length(&v("X"), &v("Y")), Some(1));
        assert_eq!(graph.compute_spanning_tree().edge_count(), 1);
    }

    #[test]
    fn display_lists_each_edge_once() {
        let graph = Graph::from_pairs(pairs(&[("A", "B"), ("B", "C"), ("A", "C")]));

        assert_eq!(
            graph.to_string(),
            "Vertices:\n A B C\nEdges:\n A-B A-C B-C"
        );
    }
}
