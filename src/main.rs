//! Standalone benchmark comparing TTL lookup latency across the two JSON
//! document layouts.
//!
//! Loads the array- and object-layout documents from their fixed paths,
//! probes each layout once for the reported TTL, times ten million lookups
//! per layout, and prints the comparison report to stdout. If either
//! document cannot be read or parsed the error is reported on stderr and the
//! process exits with status 1.
//!
//! Usage:
//!   cargo run --release

use std::process::ExitCode;

use ttl_bench::layout::array::ArrayLayout;
use ttl_bench::layout::object::ObjectLayout;
use ttl_bench::loader::load_document;
use ttl_bench::report::BenchReport;
use ttl_bench::runner::{run_lookup, BenchConfig};

fn run() -> anyhow::Result<()> {
    let config = BenchConfig::standard();

    let array_doc = load_document(&config.array_path)?;
    let object_doc = load_document(&config.object_path)?;

    let array_layout = ArrayLayout::new();
    let object_layout = ObjectLayout::new();

    let array = run_lookup(
        &array_doc,
        &array_layout,
        &config.record_type,
        config.iterations,
    );
    let object = run_lookup(
        &object_doc,
        &object_layout,
        &config.record_type,
        config.iterations,
    );

    BenchReport {
        record_type: config.record_type,
        iterations: config.iterations,
        array,
        object,
    }
    .print();

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
