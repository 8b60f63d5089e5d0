//! Half-triangle versus full dense matrix-vector product benchmark.
//!
//! Builds a random dense symmetric matrix and times repeated applications of
//! [`DenseSymMatProd`], which reads one triangle, against faer's general dense `matmul`, which
//! reads the whole matrix. Both results are compared so a broken kernel shows up as a large
//! `max_abs_diff` rather than as a suspiciously fast time.

use anyhow::{Context, Result, anyhow, ensure};
use clap::{Parser, ValueEnum};
use dense_symop::{
    DenseSymMatProd, MatOp, Side,
    utils::perf::{get_peak_rss_kb, mean_time_s},
};
use faer::{Accum, Par, linalg::matmul::matmul, prelude::*};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Which stored triangle the symmetric operator reads.
#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum Triangle {
    Lower,
    Upper,
}

impl From<Triangle> for Side {
    fn from(triangle: Triangle) -> Self {
        match triangle {
            Triangle::Lower => Side::Lower,
            Triangle::Upper => Side::Upper,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum Method {
    SymmetricHalf,
    DenseFull,
}

/// Command-line arguments for the benchmark.
#[derive(Parser, Debug)]
#[clap(
    name = "symv-tradeoff",
    about = "Times the half-triangle symmetric product against a full dense product."
)]
struct SymvTradeoffArgs {
    /// Dimension of the dense square matrix.
    #[clap(long)]
    n: usize,
    /// Number of timed applications per method.
    #[clap(long, default_value_t = 100)]
    reps: usize,
    /// Seed for the random matrix and vector.
    #[clap(long, default_value_t = 42)]
    seed: u64,
    /// Triangle read by the symmetric operator.
    #[clap(long, value_enum, default_value_t = Triangle::Lower)]
    side: Triangle,
    /// Path to the output CSV file.
    #[clap(long)]
    output: String,
}

/// One CSV row.
#[derive(Debug, Serialize, Deserialize)]
struct SymvTradeoffResult {
    method: Method,
    side: Triangle,
    n: usize,
    reps: usize,
    mean_time_s: f64,
    max_abs_diff: f64,
    rss_kb: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    let args = SymvTradeoffArgs::parse();
    ensure!(args.n > 0, "The matrix dimension must be positive.");
    log::info!(
        "Benchmarking n = {}, reps = {}, side = {:?}",
        args.n,
        args.reps,
        args.side
    );

    // A + A^T is symmetric, so both triangles carry the same matrix.
    let mut rng = StdRng::seed_from_u64(args.seed);
    let b_rand = Mat::from_fn(args.n, args.n, |_, _| rng.random::<f64>() - 0.5);
    let a = &b_rand + b_rand.transpose();
    let x: Vec<f64> = (0..args.n).map(|_| rng.random::<f64>() - 0.5).collect();
    let x_mat = Mat::from_fn(args.n, 1, |i, _| x[i]);

    let op = DenseSymMatProd::try_new(a.as_ref(), args.side.into())
        .context("Failed to build the symmetric operator")?;

    let mut y_sym = vec![0.0; args.n];
    let sym_time = mean_time_s(args.reps, || op.perform_op(&x, &mut y_sym));
    let sym_rss = get_peak_rss_kb();
    log::info!("Symmetric half-triangle product: {sym_time:.3e} s per apply");

    let mut y_full = Mat::<f64>::zeros(args.n, 1);
    let full_time = mean_time_s(args.reps, || {
        matmul(
            y_full.as_mut(),
            Accum::Replace,
            a.as_ref(),
            x_mat.as_ref(),
            1.0,
            Par::Seq,
        )
    });
    let full_rss = get_peak_rss_kb();
    log::info!("Full dense product: {full_time:.3e} s per apply");

    // Make sure both buffers hold a result even when reps == 0.
    op.perform_op(&x, &mut y_sym);
    matmul(
        y_full.as_mut(),
        Accum::Replace,
        a.as_ref(),
        x_mat.as_ref(),
        1.0,
        Par::Seq,
    );
    let max_abs_diff = y_sym
        .iter()
        .enumerate()
        .map(|(i, v)| (v - y_full[(i, 0)]).abs())
        .fold(0.0, f64::max);
    if max_abs_diff > 1e-10 * args.n as f64 {
        log::warn!("Results differ by {max_abs_diff:.3e}");
    }

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to open {}", args.output))?;
    for (method, mean_time_s, rss_kb) in [
        (Method::SymmetricHalf, sym_time, sym_rss),
        (Method::DenseFull, full_time, full_rss),
    ] {
        writer.serialize(SymvTradeoffResult {
            method,
            side: args.side,
            n: args.n,
            reps: args.reps,
            mean_time_s,
            max_abs_diff,
            rss_kb,
        })?;
    }
    writer.flush()?;

    log::info!("Results written to {}.", args.output);
    Ok(())
}
