//! Divide-and-conquer convex hulls in 2D.
//!
//! The crate computes the convex hull of a finite planar point set by
//! recursive split-and-merge: x-sort once, recurse down to 2–3 point base
//! cases, then stitch sibling hulls together along their upper and lower
//! tangents. Hulls are vertex cycles in clockwise winding order, ready for a
//! renderer that draws each consecutive edge (wraparound included).
//!
//! Entry points live in [`hull`]; [`cloud`] provides a deterministic point
//! sampler for benches, tests, and demo runs.

pub mod cloud;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, hull_of_sorted, prepare_points, Hull, HullError, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_point_cloud, CloudCfg, ReplayToken, Window};
    pub use crate::hull::{convex_hull, hull_of_sorted, prepare_points, Hull, HullError, Point};
    pub use nalgebra::Vector2 as Vec2;
}
