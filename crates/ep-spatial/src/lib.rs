//! `ep-spatial` — road network synthesis and routing.
//!
//! # Pipeline
//!
//! ```text
//! building tiles ──► complete_graph ──► kruskal ──► RoadAugmenter ──► RoadNetwork
//!                    (every pair)       (MST)       (extra leaf roads)   │
//!                                                                        ▼
//!                                                            DijkstraRouter queries
//! ```
//!
//! The network is built once per run and shared read-only by every route
//! computation.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`graph`]        | `Graph` (symmetric adjacency), `Edge`, `complete_graph`   |
//! | [`disjoint_set`] | `DisjointSetForest` (union-find)                          |
//! | [`mst`]          | `kruskal`                                                 |
//! | [`augment`]      | `RoadAugmenter`, `segments_cross`, `anticlockwise`        |
//! | [`network`]      | `RoadNetwork`, `RoadNetworkBuilder`, `build_road_network` |
//! | [`router`]       | `Router` trait, `Path`, `DijkstraRouter`                  |
//! | [`error`]        | `SpatialError`, `SpatialResult<T>`                        |

pub mod augment;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod mst;
pub mod network;
pub mod router;


pub use augment::{RoadAugmenter, anticlockwise, segments_cross};
pub use disjoint_set::DisjointSetForest;
pub use ep_core::PartnerSelection;
pub use error::{SpatialError, SpatialResult};
pub use graph::{Edge, Graph, Neighbor, complete_graph};
pub use mst::kruskal;
pub use network::{RoadNetwork, RoadNetworkBuilder, build_road_network};
pub use router::{DijkstraRouter, Path, Router};
