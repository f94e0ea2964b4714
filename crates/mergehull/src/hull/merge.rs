//! Merge assembler: stitch two sibling hulls along their tangents.

use super::tangent::{find_tangent, SweepDir};
use super::types::Point;

/// Index of the rightmost vertex of a clockwise hull, found by scanning
/// forward from the leftmost anchor until x stops increasing.
///
/// The upper chain of a clockwise hull is x-nondecreasing from index 0, so
/// the first strict drop in x marks the rightmost vertex; if none occurs
/// the last vertex is it.
pub(crate) fn rightmost_index(hull: &[Point]) -> usize {
    for i in 0..hull.len() - 1 {
        if hull[i + 1].x < hull[i].x {
            return i;
        }
    }
    hull.len() - 1
}

/// Merge two clockwise hulls, `left` strictly preceding `right` in the
/// x-sorted input, into one clockwise hull.
///
/// The left hull's starting pivot is its rightmost vertex; the right
/// hull's is index 0, its leftmost vertex by the anchor invariant. The
/// upper tangent is found left-to-right, the lower by the role-swapped
/// call. The stitched cycle walks the left hull's upper chain, the right
/// hull between its tangent vertices, and the left hull's closing tail, so
/// index 0 of the output is again the combined leftmost vertex.
pub(crate) fn merge_hulls(left: &[Point], right: &[Point]) -> Vec<Point> {
    let left_pivot = rightmost_index(left);
    let (left_upper, right_upper) =
        find_tangent(left, right, left_pivot, 0, SweepDir::LeftToRight);
    let (right_lower, left_lower) =
        find_tangent(right, left, 0, left_pivot, SweepDir::RightToLeft);

    // The right hull's forward walk either stays in-range (upper index not
    // past the lower one) or wraps to its anchor; both at once would mean
    // the right hull contributes nothing but its anchor, which a 2+ vertex
    // hull cannot do.
    debug_assert!(right_upper <= right_lower || right_lower == 0);
    debug_assert!(right_upper != 0 || right_lower != 0);

    let mut verts = Vec::with_capacity(left.len() + right.len());
    verts.extend_from_slice(&left[..=left_upper]);
    if right_upper <= right_lower {
        verts.extend_from_slice(&right[right_upper..=right_lower]);
    }
    if right_lower == 0 {
        // The walk wraps to the right hull's start: append the remaining
        // tail plus the anchor vertex itself.
        verts.extend_from_slice(&right[right_upper..]);
        verts.push(right[0]);
    }
    if left_lower != 0 {
        verts.extend_from_slice(&left[left_lower..]);
    }
    verts
}
