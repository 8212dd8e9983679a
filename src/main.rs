use std::hint::black_box;
use std::time::Instant;

use clap::Parser;
use flexi_logger::{FlexiLoggerError, Logger};
use log::{info, warn};
use nalgebra::{SMatrix, Vector3};

use vecint::batch::{intersect_batch, ResultBatch};
use vecint::fixture::{demo_normal, demo_ray, Fixture};
use vecint::lanes::{DefaultLanes, Lanes};
use vecint::layout::{
    AosPlanes, InterleavedPlanes, Interleaving, LayoutKind, PlaneLayout, SoaPlanes,
};
use vecint::ray::{intersect, Ray};

/// Times the ray/plane intersection kernels over every plane layout.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of kernel calls per layout.
    #[arg(long, default_value_t = 1_000_000)]
    iterations: usize,
    /// Number of planes in the batch.
    #[arg(long, default_value_t = 8)]
    planes: usize,
    /// Only run this layout.
    #[arg(long, value_enum)]
    layout: Option<LayoutKind>,
    /// Chunk order of the interleaved layout.
    #[arg(long, value_enum, default_value_t = Interleaving::ChunkMajor)]
    interleaving: Interleaving,
    /// Log the first results every this many iterations. Zero disables the samples.
    #[arg(long, default_value_t = 100_000)]
    report_every: usize,
    /// Split every batch over the rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), FlexiLoggerError> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let cli = Cli::parse();
    info!(
        "{} iterations over {} planes, {} lanes of f32, interleaving {:?}",
        cli.iterations,
        cli.planes,
        DefaultLanes::WIDTH,
        cli.interleaving
    );
    if cli.parallel && cfg!(not(feature = "rayon")) {
        warn!("built without the rayon feature, running sequentially");
    }

    let fixture = Fixture::<f32>::demonstration(cli.planes);
    let layouts = match cli.layout {
        Some(layout) => vec![layout],
        None => LayoutKind::ALL.to_vec(),
    };

    for layout in layouts {
        let seconds = match layout {
            LayoutKind::Aos => {
                let planes = AosPlanes::from_points(&fixture.points);
                run(&cli, &fixture, &planes)
            }
            LayoutKind::SoaSplit => {
                let planes = SoaPlanes::<DefaultLanes>::from_points(&fixture.points);
                run(&cli, &fixture, &planes)
            }
            LayoutKind::SoaInterleaved => {
                let planes = InterleavedPlanes::<DefaultLanes>::from_points(
                    &fixture.points,
                    cli.interleaving,
                );
                run(&cli, &fixture, &planes)
            }
        };
        info!(
            "{}: {:.3} s, {:.1} ns per call",
            layout,
            seconds,
            per_call(&cli, seconds)
        );
    }

    if cli.layout.is_none() {
        for (rows, seconds) in [
            (4, run_matrix::<4>(&cli)),
            (6, run_matrix::<6>(&cli)),
            (8, run_matrix::<8>(&cli)),
            (9, run_matrix::<9>(&cli)),
        ] {
            info!(
                "matrix {}x3: {:.3} s, {:.1} ns per call",
                rows,
                seconds,
                per_call(&cli, seconds)
            );
        }
    }

    Ok(())
}

fn per_call(cli: &Cli, seconds: f64) -> f64 {
    seconds * 1e9 / cli.iterations.max(1) as f64
}

/// Runs the batched kernel `cli.iterations` times and returns the elapsed seconds.
fn run<P>(cli: &Cli, fixture: &Fixture<f32>, planes: &P) -> f64
where
    P: PlaneLayout<DefaultLanes> + Sync,
{
    let mut results = ResultBatch::with_capacity(planes.chunk_count() * DefaultLanes::WIDTH);
    let start = Instant::now();

    for iteration in 0..cli.iterations {
        kernel(
            cli.parallel,
            black_box(&fixture.ray),
            &fixture.normal,
            planes,
            &mut results,
        );
        if cli.report_every > 0 && iteration % cli.report_every == 0 {
            info!(
                "{}: {:?}",
                <P as PlaneLayout<DefaultLanes>>::KIND,
                results.lane_group(0, 2)
            );
        }
        black_box(&results);
    }

    start.elapsed().as_secs_f64()
}

#[cfg(feature = "rayon")]
fn kernel<P>(
    parallel: bool,
    ray: &Ray<f32>,
    normal: &Vector3<f32>,
    planes: &P,
    results: &mut ResultBatch<f32>,
) where
    P: PlaneLayout<DefaultLanes> + Sync,
{
    if parallel {
        vecint::batch::par_intersect_batch::<DefaultLanes, P>(ray, normal, planes, results);
    } else {
        intersect_batch::<DefaultLanes, P>(ray, normal, planes, results);
    }
}

#[cfg(not(feature = "rayon"))]
fn kernel<P>(
    _parallel: bool,
    ray: &Ray<f32>,
    normal: &Vector3<f32>,
    planes: &P,
    results: &mut ResultBatch<f32>,
) where
    P: PlaneLayout<DefaultLanes> + Sync,
{
    intersect_batch::<DefaultLanes, P>(ray, normal, planes, results);
}

/// Runs the matrix kernel on `K` stacked demonstration planes and returns the elapsed seconds.
fn run_matrix<const K: usize>(cli: &Cli) -> f64 {
    let ray = demo_ray::<f32>();
    let normal = demo_normal::<f32>();
    let rays = SMatrix::<f32, K, 3>::from_fn(|_, c| ray.direction[c]);
    let origins = SMatrix::<f32, K, 3>::from_fn(|_, c| ray.origin[c]);
    let normals = SMatrix::<f32, K, 3>::from_fn(|_, c| normal[c]);
    let points = SMatrix::<f32, K, 3>::from_fn(|r, c| if c == 2 { 5.0 + r as f32 } else { 0.0 });

    let start = Instant::now();
    for iteration in 0..cli.iterations {
        let hits = intersect(black_box(&rays), &origins, &normals, &points);
        if cli.report_every > 0 && iteration % cli.report_every == 0 {
            info!("matrix {}x3: {} {}", K, hits.row(0), hits.row(1.min(K - 1)));
        }
        black_box(hits);
    }

    start.elapsed().as_secs_f64()
}
