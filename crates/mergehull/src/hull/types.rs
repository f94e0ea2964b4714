//! Hull value types and input-contract errors.
//!
//! - `Point`: plain 2D coordinate, owned by the caller and never mutated.
//! - `Hull`: clockwise vertex cycle with the index-0 anchor invariant.
//! - `HullError`: precondition violations surfaced to the caller.

use nalgebra::Vector2;

use super::util::{cross, lex_le};

/// 2D point with real-valued coordinates.
pub type Point = Vector2<f64>;

/// Convex hull as a cyclic vertex sequence.
///
/// Invariants:
/// - At least 2 vertices; 2 vertices form a degenerate hull (one edge
///   traversed both ways).
/// - Clockwise winding: the shoelace sum over the cycle is <= 0.
/// - No two consecutive vertices identical.
/// - Index 0 is the lexicographically smallest (x, then y) vertex. The
///   tangent search relies on this anchor for its starting pivots, so every
///   constructor in this module preserves it.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    verts: Vec<Point>,
}

impl Hull {
    /// Wrap an already clockwise-ordered, index-0-anchored vertex cycle.
    pub(crate) fn from_clockwise(verts: Vec<Point>) -> Self {
        debug_assert!(verts.len() >= 2, "hull needs at least 2 vertices");
        debug_assert!(
            (0..verts.len()).all(|i| verts[i] != verts[(i + 1) % verts.len()]),
            "consecutive duplicate hull vertex"
        );
        debug_assert!(
            verts.iter().all(|v| lex_le(verts[0], *v)),
            "hull index 0 is not the lexicographic minimum"
        );
        Self { verts }
    }

    /// Hull vertices in clockwise order, starting at the leftmost vertex.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    /// Consume the hull, returning its vertex cycle.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.verts
    }

    /// Number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Consecutive vertex pairs, wraparound edge included.
    ///
    /// This is the renderer contract: drawing one segment per yielded pair
    /// traces the closed hull boundary. A 2-vertex hull yields the same edge
    /// in both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Signed polygon area via the shoelace sum; <= 0 for clockwise cycles.
    pub fn signed_area(&self) -> f64 {
        let n = self.verts.len();
        let mut acc = 0.0;
        for i in 0..n {
            let p = self.verts[i];
            let q = self.verts[(i + 1) % n];
            acc += p.x * q.y - q.x * p.y;
        }
        acc * 0.5
    }

    /// Membership check with slack `eps`.
    ///
    /// eps policy (as elsewhere in the crate): `eps > 0` is permissive and
    /// accepts points slightly outside; `eps < 0` shrinks the hull and
    /// certifies strict interior membership.
    ///
    /// A degenerate 2-vertex hull contains exactly the points within `eps`
    /// of its segment.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        if self.verts.len() == 2 {
            // A segment has no interior, so any negative eps rejects.
            return dist_to_segment(p, self.verts[0], self.verts[1]) <= eps;
        }
        // Clockwise winding puts the interior on the right of every directed
        // edge: cross(b - a, p - a) <= 0 up to slack.
        self.edges().all(|(a, b)| cross(b - a, p - a) <= eps)
    }
}

/// Distance from `p` to the closed segment `ab`.
fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Input-contract violations detected before or during hull computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HullError {
    /// Fewer than 2 distinct points remained after collapsing exact
    /// duplicates. A single point has no defined hull here.
    #[error("need at least 2 distinct points, got {got}")]
    TooFewPoints { got: usize },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate at input index {index}")]
    NonFiniteCoordinate { index: usize },
}
