//! Recursion control and public entry points.
//!
//! The input is validated, sorted, and deduplicated once
//! ([`prepare_points`]); the recursion itself ([`hull_of_sorted`]) works on
//! sub-slices of that single buffer, so sibling calls own disjoint index
//! ranges and no point is ever copied per level. The two phases are split
//! so callers can time sorting and hull construction separately.

use super::base::resolve_base;
use super::merge::merge_hulls;
use super::types::{Hull, HullError, Point};
use super::util::{cross, lex_cmp};

/// Validate, sort by (x, y), and collapse exact duplicate points.
///
/// Errors on non-finite coordinates and when fewer than 2 distinct points
/// remain; the returned buffer satisfies the preconditions of
/// [`hull_of_sorted`].
pub fn prepare_points(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFiniteCoordinate { index });
    }
    if points.len() < 2 {
        return Err(HullError::TooFewPoints { got: points.len() });
    }
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 2 {
        return Err(HullError::TooFewPoints { got: pts.len() });
    }
    Ok(pts)
}

/// Convex hull of prepared points (sorted by (x, y), distinct, n >= 2).
///
/// Fully collinear inputs short-circuit to the 2-point hull of their
/// extremes; everything else goes through the split-and-merge recursion.
pub fn hull_of_sorted(points: &[Point]) -> Hull {
    debug_assert!(points.len() >= 2);
    debug_assert!(super::util::is_sorted_distinct(points));
    if let Some(extremes) = collinear_extremes(points) {
        return Hull::from_clockwise(extremes);
    }
    Hull::from_clockwise(build(points))
}

/// Convex hull of an arbitrary finite point set.
///
/// The contract requires at least 2 distinct points; exact duplicates are
/// collapsed first. The result is a clockwise vertex cycle starting at the
/// lexicographically smallest input point.
pub fn convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    let prepared = prepare_points(points)?;
    Ok(hull_of_sorted(&prepared))
}

/// Split at floor(n/2) — the right half takes the extra element when n is
/// odd — recurse on both halves, and stitch the results.
fn build(points: &[Point]) -> Vec<Point> {
    if points.len() <= 3 {
        return resolve_base(points);
    }
    let (left, right) = points.split_at(points.len() / 2);
    let left_hull = build(left);
    let right_hull = build(right);
    merge_hulls(&left_hull, &right_hull)
}

/// If every point lies on one line, return the sorted extremes.
fn collinear_extremes(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    let dir = last - first;
    if points[1..].iter().all(|p| cross(dir, p - first) == 0.0) {
        Some(vec![first, last])
    } else {
        None
    }
}
