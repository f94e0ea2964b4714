//! Random point clouds (uniform window sampling + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the point sets the hull
//!   engine runs on, used by benches, tests, the demo example, and the CLI
//!   generator. Determinism uses a replay token `(seed, index)` mixed into
//!   a single RNG, so any draw in a sweep can be reproduced in isolation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::Point;

/// Axis-aligned sampling window.
///
/// Both extents must be non-empty (`min < max`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x < self.x_max && self.y_min <= p.y && p.y < self.y_max
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub window: Window,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            window: Window::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from the window.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    debug_assert!(cfg.window.x_min < cfg.window.x_max);
    debug_assert!(cfg.window.y_min < cfg.window.y_max);
    let mut rng = tok.to_std_rng();
    let w = cfg.window;
    (0..cfg.count)
        .map(|_| {
            Point::new(
                rng.gen_range(w.x_min..w.x_max),
                rng.gen_range(w.y_min..w.y_max),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            count: 100,
            window: Window::default(),
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_point_cloud(cfg, tok);
        let b = draw_point_cloud(cfg, tok);
        assert_eq!(a.len(), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_indices_differ() {
        let cfg = CloudCfg::default();
        let a = draw_point_cloud(cfg, ReplayToken { seed: 1, index: 0 });
        let b = draw_point_cloud(cfg, ReplayToken { seed: 1, index: 1 });
        assert_ne!(a, b);
    }

    #[test]
    fn points_land_in_window() {
        let window = Window {
            x_min: 2.0,
            x_max: 3.5,
            y_min: -4.0,
            y_max: -1.0,
        };
        let cfg = CloudCfg { count: 256, window };
        let pts = draw_point_cloud(cfg, ReplayToken { seed: 9, index: 0 });
        assert!(pts.iter().all(|p| window.contains(*p)));
    }
}
