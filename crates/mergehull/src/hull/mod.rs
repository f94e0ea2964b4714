//! Divide-and-conquer convex hull (clockwise V-representation).
//!
//! Purpose
//! - Provide a single, strict hull type ([`Hull`]: clockwise vertex cycle,
//!   index 0 at the lexicographic minimum) and the split-and-merge engine
//!   that produces it.
//!
//! Why this design
//! - The merge step walks both child hulls by index; anchoring index 0 at
//!   the leftmost vertex makes the right child's starting tangent pivot a
//!   known constant and keeps the stitch O(output).
//! - Degeneracies (vertical segments, collinear runs, duplicate points) are
//!   resolved explicitly up front or by convention, never left to
//!   divide-by-zero or non-terminating pivot cycles.
//!
//! Code cross-refs: `types::{Hull, HullError}`, `builder::convex_hull`,
//! `tangent::find_tangent`, `merge::merge_hulls`.

mod base;
mod builder;
mod merge;
mod tangent;
mod types;
mod util;

pub use builder::{convex_hull, hull_of_sorted, prepare_points};
pub use types::{Hull, HullError, Point};
