//! Kruskal's minimum spanning tree.

use crate::{DisjointSetForest, Graph};

/// Minimum spanning forest of `graph` by Kruskal's algorithm.
///
/// Edges are enumerated once ([`Graph::edges`]), stably sorted by weight —
/// equal weights keep enumeration order — and accepted whenever their
/// endpoints lie in different components.  Every input node appears in the
/// output, so a connected input of N nodes yields a tree with N − 1 edges.
///
/// Time complexity: O(E log E) for the sort plus near-constant amortised
/// union-find work per edge.
pub fn kruskal(graph: &Graph) -> Graph {
    let mut edges = graph.edges();
    edges.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut forest = DisjointSetForest::with_capacity(graph.node_count());
    for node in graph.nodes() {
        forest.make_set(node);
    }

    let mut tree = Graph::with_nodes(graph.nodes());
    for edge in &edges {
        if forest.union(edge.a, edge.b) {
            tree.add_edge(edge.a, edge.b, edge.weight);
        }
    }

    log::debug!(
        "kruskal: kept {} of {} edges (total weight {})",
        tree.edge_count(),
        edges.len(),
        tree.total_weight(),
    );
    tree
}
