//! Tangent finder: hill-climb for a supporting line between two hulls.
//!
//! Purpose
//! - Given two disjoint clockwise hulls and starting pivot vertices, locate
//!   the tangent such that neither hull has a vertex strictly outside the
//!   line in the tangent's direction.
//!
//! Why this design
//! - The climb rotates hull A backward and hull B forward, re-running both
//!   phases until a full pass adopts neither pivot. Each distinct-slope
//!   move strictly improves the slope extremum, so the fixed point exists;
//!   equal-slope candidates (collinear configurations) are adopted only
//!   when they extend the tangent's reach and are stepped over otherwise,
//!   so collinear runs end at their far vertex instead of cycling and a
//!   tie never hides a strictly better pivot beyond it.
//! - The lower tangent reuses the identical routine with hull roles and
//!   pivots swapped; only the vertical-slope convention depends on the
//!   traversal direction, captured in [`SweepDir`].

use super::types::Point;
use super::util::slope;

/// Traversal direction of a tangent-finding call.
///
/// Finite slopes are direction-independent, but a vertical candidate
/// segment must take the one-sided limit of rise/run for the side the run
/// actually approaches from: `sign(Δy)·∞` when hull B lies to the right of
/// hull A, `-sign(Δy)·∞` in the role-swapped call. Mixing the two
/// conventions misorders lower tangents whenever equal-x points straddle
/// the recursion's split boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SweepDir {
    LeftToRight,
    RightToLeft,
}

#[inline]
fn slope_toward(a: Point, b: Point, dir: SweepDir) -> f64 {
    let s = slope(a, b);
    match dir {
        SweepDir::LeftToRight => s,
        SweepDir::RightToLeft => {
            if s.is_infinite() {
                -s
            } else {
                s
            }
        }
    }
}

/// Is `cand` strictly farther from `anchor` than `curr` is?
///
/// Tie-break for equal-slope candidates: cand, curr, and anchor are
/// collinear, and only a candidate that extends the reach of the line may
/// take over as pivot.
#[inline]
fn farther(cand: Point, curr: Point, anchor: Point) -> bool {
    (cand - anchor).norm_squared() > (curr - anchor).norm_squared()
}

/// Hill-climb both pivots to a fixed point and return the tangent indices.
///
/// `hull_a` rotates backward (previous vertex, wrapping), `hull_b` forward.
/// Called with the left hull as A and `SweepDir::LeftToRight` this yields
/// the upper tangent; with roles, pivots, and direction swapped, the lower
/// tangent.
pub(crate) fn find_tangent(
    hull_a: &[Point],
    hull_b: &[Point],
    mut pivot_a: usize,
    mut pivot_b: usize,
    dir: SweepDir,
) -> (usize, usize) {
    let len_a = hull_a.len();
    let len_b = hull_b.len();
    let mut curr = slope_toward(hull_a[pivot_a], hull_b[pivot_b], dir);

    // Each phase examines every other vertex of its hull at most once and
    // the pass count is bounded; the bounds are cycle guards for degenerate
    // float inputs, not part of the convergence argument.
    for _ in 0..len_a + len_b + 2 {
        let mut changed = false;

        // Rotate A backward: adopt any candidate that lowers the slope, or
        // holds it while reaching farther; step over other ties; stop at
        // the first strictly worse candidate.
        let mut scan = pivot_a;
        let mut exams = 1;
        while exams < len_a {
            let cand = if scan == 0 { len_a - 1 } else { scan - 1 };
            let s = slope_toward(hull_a[cand], hull_b[pivot_b], dir);
            if s < curr || (s == curr && farther(hull_a[cand], hull_a[pivot_a], hull_b[pivot_b]))
            {
                pivot_a = cand;
                curr = s;
                changed = true;
            } else if s != curr {
                break;
            }
            scan = cand;
            exams += 1;
        }

        // Rotate B forward, symmetrically: adopt slope raises and farther
        // ties, step over nearer ties, stop when strictly worse.
        let mut scan = pivot_b;
        let mut exams = 1;
        while exams < len_b {
            let cand = (scan + 1) % len_b;
            let s = slope_toward(hull_a[pivot_a], hull_b[cand], dir);
            if s > curr || (s == curr && farther(hull_b[cand], hull_b[pivot_b], hull_a[pivot_a]))
            {
                pivot_b = cand;
                curr = s;
                changed = true;
            } else if s != curr {
                break;
            }
            scan = cand;
            exams += 1;
        }

        if !changed {
            break;
        }
    }
    (pivot_a, pivot_b)
}
