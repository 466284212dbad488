//! Batch helpers for driving [`BenchmarkSuite`] under Criterion.
//!
//! Criterion owns sampling, statistics and reporting. This crate only
//! supplies the single-shot pieces it cannot express itself:
//!
//! - [`run_batch`] / [`run_batches`]: invoke an operation `batch_size`
//!   times under one timer.
//! - [`warm_up`]: run the untimed warmup phase on a suite.
//! - [`measurement_window`]: size Criterion's measurement time so that
//!   each sample holds about one batch.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::hint::black_box;
use std::time::{Duration, Instant};

use listbench_core::{BatchConfig, BenchmarkSuite};

/// Floor for any duration handed to Criterion, which rejects zero.
pub const MIN_WINDOW: Duration = Duration::from_millis(1);

/// Invoke `op` against `suite` exactly `batch_size` times and return the
/// elapsed wall-clock time of the whole batch.
pub fn run_batch<F, R>(suite: &mut BenchmarkSuite, batch_size: u64, mut op: F) -> Duration
where
    F: FnMut(&mut BenchmarkSuite) -> R,
{
    let start = Instant::now();
    for _ in 0..batch_size {
        black_box(op(black_box(&mut *suite)));
    }
    start.elapsed()
}

/// Run `batches` consecutive single-shot batches and return their summed
/// time. This is the routine handed to Criterion's `iter_custom`: one
/// Criterion iteration is one batch.
pub fn run_batches<F, R>(
    suite: &mut BenchmarkSuite,
    batch_size: u64,
    batches: u64,
    mut op: F,
) -> Duration
where
    F: FnMut(&mut BenchmarkSuite) -> R,
{
    let mut total = Duration::ZERO;
    for _ in 0..batches {
        total += run_batch(suite, batch_size, &mut op);
    }
    total
}

/// Run the warmup phase. The elapsed time is returned only so the
/// measurement window can be sized from it; it is never reported.
pub fn warm_up<F, R>(suite: &mut BenchmarkSuite, warmup: &BatchConfig, op: F) -> Duration
where
    F: FnMut(&mut BenchmarkSuite) -> R,
{
    run_batches(suite, warmup.batch_size, warmup.iterations as u64, op)
}

/// Average cost of one warmup batch.
pub fn per_batch(total: Duration, iterations: usize) -> Duration {
    let divisor = u32::try_from(iterations.max(1)).unwrap_or(u32::MAX);
    total / divisor
}

/// Measurement time that fits `iterations` batches of `per_batch` each,
/// never below [`MIN_WINDOW`].
pub fn measurement_window(per_batch: Duration, iterations: usize) -> Duration {
    let n = u32::try_from(iterations).unwrap_or(u32::MAX);
    per_batch.saturating_mul(n).max(MIN_WINDOW)
}
