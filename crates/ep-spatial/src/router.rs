//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Population initialisation calls routing via the [`Router`] trait, so a
//! different search (A*, precomputed all-pairs tables) can be dropped in
//! without touching the agent code.  The default [`DijkstraRouter`] is
//! sufficient for town-sized networks.
//!
//! # Ties
//!
//! Only the shortest *distance* is unique.  When several paths share it, the
//! heap's secondary key (the node coordinate) decides which one is returned;
//! callers should not rely on the identity of the path.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use ep_core::TileCoord;

use crate::network::RoadNetwork;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Nodes from start to end inclusive.  Empty when unreachable.
    pub nodes: Vec<TileCoord>,
    /// Sum of edge weights along `nodes`; `f64::INFINITY` when unreachable.
    pub total_weight: f64,
}

impl Path {
    pub fn unreachable() -> Self {
        Self { nodes: Vec::new(), total_weight: f64::INFINITY }
    }

    pub fn is_reachable(&self) -> bool {
        self.total_weight.is_finite()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations hold no per-query state; the network is borrowed for the
/// duration of a single call.
pub trait Router: Send + Sync {
    /// Shortest path from `from` to `to`.
    ///
    /// Unreachable destinations (including nodes absent from the network)
    /// yield [`Path::unreachable`] rather than an error.
    fn shortest_path(&self, network: &RoadNetwork, from: TileCoord, to: TileCoord) -> Path;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the road adjacency lists.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, network: &RoadNetwork, from: TileCoord, to: TileCoord) -> Path {
        dijkstra(network, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Min-heap entry.  `Ord` is reversed so `BinaryHeap` (a max-heap) pops the
/// lowest cost first; the node breaks cost ties.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    cost: f64,
    node: TileCoord,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

fn dijkstra(network: &RoadNetwork, from: TileCoord, to: TileCoord) -> Path {
    if !network.contains(from) || !network.contains(to) {
        return Path::unreachable();
    }

    // dist[v] = best known cost to reach v; absent means +∞.
    let mut dist: HashMap<TileCoord, f64> = HashMap::with_capacity(network.node_count());
    // prev[v] = node that reached v on the best known path.
    let mut prev: HashMap<TileCoord, TileCoord> = HashMap::with_capacity(network.node_count());

    dist.insert(from, 0.0);
    let mut heap = BinaryHeap::new();
    heap.push(Frontier { cost: 0.0, node: from });

    while let Some(Frontier { cost, node }) = heap.pop() {
        if node == to {
            return reconstruct(&prev, from, to, cost);
        }

        // Skip stale heap entries.
        if cost > dist.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for n in network.neighbors(node) {
            let new_cost = cost + n.weight;
            if new_cost < dist.get(&n.node).copied().unwrap_or(f64::INFINITY) {
                dist.insert(n.node, new_cost);
                prev.insert(n.node, node);
                heap.push(Frontier { cost: new_cost, node: n.node });
            }
        }
    }

    Path::unreachable()
}

fn reconstruct(prev: &HashMap<TileCoord, TileCoord>, from: TileCoord, to: TileCoord, total_weight: f64) -> Path {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                nodes.push(p);
                cur = p;
            }
            None => break,
        }
    }
    nodes.reverse();
    Path { nodes, total_weight }
}
