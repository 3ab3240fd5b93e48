//! Benchmark runner: times repeated lookups against a loaded document.
//!
//! One untimed probe retrieves the TTL reported alongside the timings, then
//! the timed loop calls the layout with identical arguments a fixed number of
//! times. Identical arguments are the point: the loop measures raw call and
//! traversal cost, not cache behavior across varying inputs.

use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::layout::{Document, TtlLayout};

/// Fixed run parameters, constructed once at startup.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub array_path: PathBuf,
    pub object_path: PathBuf,
    pub record_type: String,
    pub iterations: u64,
}

impl BenchConfig {
    /// The standard run: the two shipped document paths, record type `A`,
    /// ten million lookups per layout.
    pub fn standard() -> Self {
        Self {
            array_path: PathBuf::from("/data/array_data.json"),
            object_path: PathBuf::from("/data/object_data.json"),
            record_type: "A".to_string(),
            iterations: 10_000_000,
        }
    }
}

/// Timing and probe results from one layout's run.
#[derive(Debug, Clone)]
pub struct LayoutRun {
    pub layout_name: &'static str,
    /// TTL retrieved by the untimed probe. `None` when the record type is
    /// unmapped, or when the run had zero iterations.
    pub ttl: Option<i64>,
    pub elapsed: Duration,
    pub iterations: u64,
}

impl LayoutRun {
    /// Total elapsed time in fractional milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    /// Mean time per lookup in microseconds. Zero iterations measure
    /// nothing and report a zero mean.
    pub fn avg_us_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e6 / self.iterations as f64
    }
}

/// Run `layout.lookup(doc, record_type)` exactly `iterations` times and
/// measure the elapsed wall-clock time.
pub fn run_lookup(
    doc: &Document,
    layout: &dyn TtlLayout,
    record_type: &str,
    iterations: u64,
) -> LayoutRun {
    if iterations == 0 {
        return LayoutRun {
            layout_name: layout.name(),
            ttl: None,
            elapsed: Duration::ZERO,
            iterations,
        };
    }

    // Correctness probe, outside the timed window.
    let ttl = layout.lookup(doc, record_type);

    log::info!(
        "timing {} layout: {} lookups of record type {:?}",
        layout.name(),
        iterations,
        record_type
    );

    let start = Instant::now();
    for _ in 0..iterations {
        // black_box keeps the optimizer from hoisting or discarding the
        // pure lookup.
        black_box(layout.lookup(black_box(doc), black_box(record_type)));
    }
    let elapsed = start.elapsed();

    log::info!(
        "{} layout finished in {:.2?} ({:.4} us/op)",
        layout.name(),
        elapsed,
        elapsed.as_secs_f64() * 1e6 / iterations as f64
    );

    LayoutRun {
        layout_name: layout.name(),
        ttl,
        elapsed,
        iterations,
    }
}

// ---------------------------------------------------------------------------
//  Unit Tests
// ---------------------------------------------------------------------------
