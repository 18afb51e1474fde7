use crate::{
    core::Label,
    graph::Graph,
    visit::{Bfs, Discovery, VisitSet, Visitor},
};

/// Walks every connected component of the graph.
///
/// Roots are taken in vertex order, skipping vertices already reached from an
/// earlier root. Every discovery is reported together with the zero-based
/// index of its component. Returns the number of components.
///
/// Each non-root discovery carries exactly one discovery edge, so the walk
/// reports `n - c` discovery edges in total for `n` vertices and `c`
/// components.
pub(crate) fn walk_components<T, F>(graph: &Graph<T>, mut visit: F) -> usize
where
    T: Label,
    F: FnMut(usize, &Discovery),
{
    let mut traversal = Bfs::new(graph);
    let mut count = 0;

    for root in graph.vertex_ids() {
        if traversal.visited().is_visited(&root) {
            continue;
        }

        for discovery in traversal.start(root).into_iter(graph) {
            visit(count, &discovery);
        }

        count += 1;
    }

    count
}
