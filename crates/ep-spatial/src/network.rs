//! Road network representation and builder.
//!
//! # Construction
//!
//! ```text
//! buildings ─► complete_graph ─► kruskal ─► (RoadAugmenter) ─► RoadNetwork
//! ```
//!
//! The network is immutable once built.  Route queries borrow it and keep no
//! state between calls, so one network serves every agent's route.

use ep_core::{PartnerSelection, TileCoord};

use crate::router::{DijkstraRouter, Path, Router};
use crate::{Edge, Graph, Neighbor, RoadAugmenter, SpatialError, SpatialResult, complete_graph, kruskal};

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph between building tiles.
///
/// Do not construct from an arbitrary graph unless it is already the road
/// layout you want; use [`RoadNetworkBuilder`] or [`build_road_network`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadNetwork {
    graph: Graph,
}

impl RoadNetwork {
    /// Wrap an existing graph as a road network.
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// A network with no nodes.  Every route query against it is unreachable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: TileCoord) -> bool {
        self.graph.contains(node)
    }

    #[inline]
    pub fn neighbors(&self, node: TileCoord) -> &[Neighbor] {
        self.graph.neighbors(node)
    }

    pub fn degree(&self, node: TileCoord) -> usize {
        self.graph.degree(node)
    }

    /// Every road exactly once, oriented `a < b`.
    pub fn roads(&self) -> Vec<Edge> {
        self.graph.edges()
    }

    /// Shortest path by [`DijkstraRouter`].
    ///
    /// Returns `([start], 0)` when `start == end` and an unreachable
    /// [`Path`] (empty, `+∞`) when there is no route.
    pub fn shortest_path(&self, start: TileCoord, end: TileCoord) -> Path {
        DijkstraRouter.shortest_path(self, start, end)
    }

    /// Like [`shortest_path`](Self::shortest_path) but turns a missing node
    /// or an unreachable destination into an error.
    pub fn route(&self, router: &dyn Router, from: TileCoord, to: TileCoord) -> SpatialResult<Path> {
        for node in [from, to] {
            if !self.contains(node) {
                return Err(SpatialError::NodeNotFound(node));
            }
        }
        let path = router.shortest_path(self, from, to);
        if path.is_reachable() {
            Ok(path)
        } else {
            Err(SpatialError::NoRoute { from, to })
        }
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Collect building tiles, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ep_core::TileCoord;
/// use ep_spatial::RoadNetworkBuilder;
///
/// let net = RoadNetworkBuilder::new()
///     .building(TileCoord::new(0, 0))
///     .building(TileCoord::new(4, 0))
///     .building(TileCoord::new(4, 3))
///     .build();
/// assert_eq!(net.node_count(), 3);
/// assert_eq!(net.edge_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RoadNetworkBuilder {
    buildings:    Vec<TileCoord>,
    augmentation: bool,
    augmenter:    RoadAugmenter,
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadNetworkBuilder {
    /// An empty builder with augmentation disabled.
    pub fn new() -> Self {
        Self {
            buildings:    Vec::new(),
            augmentation: false,
            augmenter:    RoadAugmenter::default(),
        }
    }

    pub fn building(mut self, tile: TileCoord) -> Self {
        self.buildings.push(tile);
        self
    }

    pub fn buildings(mut self, tiles: impl IntoIterator<Item = TileCoord>) -> Self {
        self.buildings.extend(tiles);
        self
    }

    /// Enable or disable extra leaf-to-leaf roads.
    pub fn augmentation(mut self, enabled: bool) -> Self {
        self.augmentation = enabled;
        self
    }

    pub fn min_extra_edge_distance(mut self, distance: f64) -> Self {
        self.augmenter.min_distance = distance;
        self
    }

    pub fn partner_selection(mut self, selection: PartnerSelection) -> Self {
        self.augmenter.selection = selection;
        self
    }

    pub fn build(self) -> RoadNetwork {
        let complete = complete_graph(self.buildings);
        let mut roads = kruskal(&complete);
        if self.augmentation {
            self.augmenter.augment(&mut roads);
        }
        log::info!(
            "road network: {} buildings, {} roads",
            roads.node_count(),
            roads.edge_count(),
        );
        RoadNetwork::from_graph(roads)
    }
}

/// Build a road network over `nodes` with the default (last-qualifying)
/// partner selection.
pub fn build_road_network(
    nodes: impl IntoIterator<Item = TileCoord>,
    min_extra_edge_distance: f64,
    include_augmentation: bool,
) -> RoadNetwork {
    RoadNetworkBuilder::new()
        .buildings(nodes)
        .min_extra_edge_distance(min_extra_edge_distance)
        .augmentation(include_augmentation)
        .build()
}
