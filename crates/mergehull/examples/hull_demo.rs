//! Timed hull runs over random clouds, for quick sanity on counts.
//!
//! Usage:
//!   cargo run -p mergehull --example hull_demo -- 100000
//!
//! Prints a few samples with vertex counts and the sort / hull phase
//! timings reported separately.

use std::time::Instant;

use mergehull::cloud::{draw_point_cloud, CloudCfg, ReplayToken, Window};
use mergehull::hull::{hull_of_sorted, prepare_points};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let cfg = CloudCfg {
        count,
        window: Window::default(),
    };
    for index in 0..3 {
        let cloud = draw_point_cloud(cfg, ReplayToken { seed: 2026, index });

        let t0 = Instant::now();
        let sorted = prepare_points(&cloud).expect("sampled cloud is valid input");
        let sort_elapsed = t0.elapsed();

        let t1 = Instant::now();
        let hull = hull_of_sorted(&sorted);
        let hull_elapsed = t1.elapsed();

        println!(
            "sample {index}: n={count}, hull vertices={}, sort={sort_elapsed:?}, hull={hull_elapsed:?}",
            hull.len()
        );
    }
}
