use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use mergehull::cloud::{draw_point_cloud, CloudCfg, ReplayToken, Window};
use mergehull::hull::{hull_of_sorted, prepare_points, Point};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-cloud generation and convex hull runs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample a uniform point cloud and write it as CSV
    Gen {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half-width of the symmetric sampling window
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long)]
        out: String,
    },
    /// Compute the hull of a CSV point file and write a JSON document
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            count,
            seed,
            extent,
            out,
        } => generate(count, seed, extent, out),
        Action::Run { input, out } => run(input, out),
    }
}

fn generate(count: usize, seed: u64, extent: f64, out: String) -> Result<()> {
    tracing::info!(count, seed, extent, out, "gen");
    let cfg = CloudCfg {
        count,
        window: Window {
            x_min: -extent,
            x_max: extent,
            y_min: -extent,
            y_max: extent,
        },
    };
    let cloud = draw_point_cloud(cfg, ReplayToken { seed, index: 0 });

    let mut csv = String::with_capacity(16 * cloud.len() + 4);
    csv.push_str("x,y\n");
    for p in &cloud {
        writeln!(csv, "{},{}", p.x, p.y).expect("string write");
    }
    write_output(Path::new(&out), csv.as_bytes())
}

fn run(input: String, out: String) -> Result<()> {
    let points = read_points_csv(&input)?;
    tracing::info!(n = points.len(), input, "loaded point cloud");

    let t0 = Instant::now();
    let sorted = prepare_points(&points)?;
    let sort_seconds = t0.elapsed().as_secs_f64();

    let t1 = Instant::now();
    let hull = hull_of_sorted(&sorted);
    let hull_seconds = t1.elapsed().as_secs_f64();

    tracing::info!(
        sort_seconds,
        hull_seconds,
        hull_vertices = hull.len(),
        "hull computed"
    );

    let doc = HullDocument {
        count: points.len(),
        hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
        timings: Timings {
            sort_seconds,
            hull_seconds,
        },
    };
    write_output(Path::new(&out), &serde_json::to_vec_pretty(&doc)?)
}

/// Hull result document, consumable by a renderer drawing the edge between
/// each consecutive vertex pair (wraparound included).
#[derive(Serialize)]
struct HullDocument {
    count: usize,
    hull: Vec<[f64; 2]>,
    timings: Timings,
}

#[derive(Serialize)]
struct Timings {
    sort_seconds: f64,
    hull_seconds: f64,
}

fn read_points_csv(input: &str) -> Result<Vec<Point>> {
    let lf = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {input}"))?;
    let df = lf.collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    Ok(xs
        .into_iter()
        .zip(ys.into_iter())
        .filter_map(|(x, y)| Some(Point::new(x?, y?)))
        .collect())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
