//! Undirected weighted graph over building tiles.
//!
//! # Data layout
//!
//! Adjacency lists keyed by [`TileCoord`] in a `BTreeMap`.  Every undirected
//! edge is stored twice, once on each endpoint's list; the mutators below are
//! the only way to add edges, so the symmetry invariant always holds.
//!
//! The ordered map makes node iteration — and therefore edge enumeration and
//! Kruskal's tie-breaking — a function of the coordinates alone, so the same
//! building layout always yields the same road network.

use std::collections::BTreeMap;

use ep_core::TileCoord;

/// One adjacency entry: the node at the other end and the edge weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub node:   TileCoord,
    pub weight: f64,
}

/// An undirected edge `(weight, a, b)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub weight: f64,
    pub a:      TileCoord,
    pub b:      TileCoord,
}

/// Symmetric adjacency-list graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<TileCoord, Vec<Neighbor>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph holding `nodes` and no edges.
    pub fn with_nodes(nodes: impl IntoIterator<Item = TileCoord>) -> Self {
        let adjacency = nodes.into_iter().map(|n| (n, Vec::new())).collect();
        Self { adjacency }
    }

    /// Register `node` with no edges.  No-op if it is already present.
    pub fn add_node(&mut self, node: TileCoord) {
        self.adjacency.entry(node).or_default();
    }

    /// Add the undirected edge `a — b` to both endpoints' lists.
    ///
    /// Self-loops and edges already present are ignored; returns `true` only
    /// if the edge was new.  Missing endpoints are registered.
    pub fn add_edge(&mut self, a: TileCoord, b: TileCoord, weight: f64) -> bool {
        if a == b || self.has_edge(a, b) {
            return false;
        }
        self.push_edge(a, b, weight);
        true
    }

    /// Append without the duplicate scan.  Callers guarantee `a != b` and
    /// that the edge is absent.
    fn push_edge(&mut self, a: TileCoord, b: TileCoord, weight: f64) {
        self.adjacency.entry(a).or_default().push(Neighbor { node: b, weight });
        self.adjacency.entry(b).or_default().push(Neighbor { node: a, weight });
    }

    pub fn contains(&self, node: TileCoord) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn has_edge(&self, a: TileCoord, b: TileCoord) -> bool {
        self.neighbors(a).iter().any(|n| n.node == b)
    }

    /// Adjacency list of `node`; empty for unknown nodes.
    pub fn neighbors(&self, node: TileCoord) -> &[Neighbor] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: TileCoord) -> usize {
        self.neighbors(node).len()
    }

    /// Nodes in ascending coordinate order.
    pub fn nodes(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.adjacency.keys().copied()
    }

    /// `(node, adjacency list)` pairs in ascending coordinate order.  Each
    /// undirected edge appears twice, once from each endpoint.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &[Neighbor])> + '_ {
        self.adjacency.iter().map(|(&n, adj)| (n, adj.as_slice()))
    }

    /// Every undirected edge exactly once, oriented `a < b`, in node order
    /// then adjacency-list order.
    pub fn edges(&self) -> Vec<Edge> {
        self.iter()
            .flat_map(|(a, adj)| {
                adj.iter()
                    .filter(move |n| a < n.node)
                    .map(move |n| Edge { weight: n.weight, a, b: n.node })
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Sum of all undirected edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|e| e.weight).sum()
    }
}

/// Build the complete graph on `nodes`: every pair of distinct nodes joined
/// by an edge of weight ⌊Euclidean distance⌋.
///
/// Duplicate input nodes collapse; an empty input yields an empty graph.
/// Time and memory are O(N²).
pub fn complete_graph(nodes: impl IntoIterator<Item = TileCoord>) -> Graph {
    let mut graph = Graph::with_nodes(nodes);
    let sorted: Vec<TileCoord> = graph.nodes().collect();
    for (i, &a) in sorted.iter().enumerate() {
        for &b in &sorted[i + 1..] {
            graph.push_edge(a, b, a.distance(b).floor());
        }
    }
    log::debug!(
        "complete graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count(),
    );
    graph
}
