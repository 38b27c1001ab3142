//! Extra leaf-to-leaf roads on top of the spanning tree.
//!
//! A spanning tree has exactly one road into every leaf, which makes dead
//! ends and long detours.  [`RoadAugmenter`] gives each leaf of the tree at
//! most one more road to another leaf, provided the new road is long enough
//! and does not cross any road already laid.

use ep_core::{PartnerSelection, TileCoord};

use crate::Graph;

/// `true` if `p1 → p2 → p3` turn anticlockwise, i.e. the 2-D cross product
/// `(p3.y − p1.y)(p2.x − p1.x) − (p2.y − p1.y)(p3.x − p1.x)` is positive.
/// Collinear triples are not anticlockwise.
#[inline]
pub fn anticlockwise(p1: TileCoord, p2: TileCoord, p3: TileCoord) -> bool {
    let lhs = i64::from(p3.y - p1.y) * i64::from(p2.x - p1.x);
    let rhs = i64::from(p2.y - p1.y) * i64::from(p3.x - p1.x);
    lhs > rhs
}

/// `true` if segment `a1–a2` crosses segment `b1–b2`: `a1` and `a2` lie on
/// opposite sides of `b1–b2`, and `b1` and `b2` on opposite sides of `a1–a2`.
///
/// Collinear overlaps do not count.  When the segments share an endpoint the
/// result follows the orientation test as written and depends on argument
/// order.
#[inline]
pub fn segments_cross(a1: TileCoord, a2: TileCoord, b1: TileCoord, b2: TileCoord) -> bool {
    anticlockwise(a1, b1, b2) != anticlockwise(a2, b1, b2)
        && anticlockwise(a1, a2, b1) != anticlockwise(a1, a2, b2)
}

/// Adds at most one extra road per leaf of a spanning tree.
///
/// # Procedure
///
/// 1. Collect every node of degree exactly 1, in node order.  Nodes with no
///    roads are not leaves and are skipped.
/// 2. For each leaf, scan the other leaves.  A partner qualifies if it is not
///    already adjacent, lies strictly farther than `min_distance`, and the
///    straight road to it crosses no road in the network — every adjacency
///    entry of every node is tested, including roads added earlier in this
///    pass.
/// 3. Pick a partner per [`PartnerSelection`] and add the road with weight
///    equal to the exact (unfloored) Euclidean distance.
///
/// Leaves are fixed in step 1, so a leaf that gains a road still initiates
/// its own connection later in the pass.
#[derive(Clone, Debug)]
pub struct RoadAugmenter {
    /// Partners at or below this distance (tile units) are rejected.
    pub min_distance: f64,
    pub selection:    PartnerSelection,
}

impl Default for RoadAugmenter {
    fn default() -> Self {
        Self { min_distance: 3.0, selection: PartnerSelection::LastQualifying }
    }
}

impl RoadAugmenter {
    pub fn new(min_distance: f64, selection: PartnerSelection) -> Self {
        Self { min_distance, selection }
    }

    /// Augment `graph` in place and return the number of roads added.
    pub fn augment(&self, graph: &mut Graph) -> usize {
        let leaves: Vec<TileCoord> = graph.nodes().filter(|&n| graph.degree(n) == 1).collect();

        let mut added = 0;
        for &leaf in &leaves {
            let Some(partner) = self.choose_partner(graph, leaf, &leaves) else {
                continue;
            };
            if graph.add_edge(leaf, partner, leaf.distance(partner)) {
                log::trace!("extra road {leaf} — {partner}");
                added += 1;
            }
        }

        log::debug!("augmentation: {} leaves, {added} extra roads", leaves.len());
        added
    }

    /// The partner `leaf` would connect to, if any qualifies.
    pub fn choose_partner(&self, graph: &Graph, leaf: TileCoord, leaves: &[TileCoord]) -> Option<TileCoord> {
        let mut chosen: Option<(TileCoord, f64)> = None;

        for &other in leaves {
            if other == leaf || graph.has_edge(leaf, other) {
                continue;
            }
            let distance = leaf.distance(other);
            if distance <= self.min_distance {
                continue;
            }
            if let (PartnerSelection::Nearest, Some((_, best))) = (self.selection, chosen) {
                if best <= distance {
                    continue;
                }
            }
            if crosses_network(graph, leaf, other) {
                continue;
            }
            chosen = Some((other, distance));
        }

        chosen.map(|(node, _)| node)
    }
}

/// `true` if the segment `a–b` crosses any road in `graph`.
fn crosses_network(graph: &Graph, a: TileCoord, b: TileCoord) -> bool {
    graph
        .iter()
        .any(|(node, adj)| adj.iter().any(|n| segments_cross(node, n.node, a, b)))
}
