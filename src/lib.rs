//! JSON Layout Latency Benchmark
//!
//! Measures how long it takes to retrieve the TTL for a DNS record type from
//! two JSON document layouts:
//! - **Array layout**: the TTL table is a list of entries, each covering one
//!   or more record-type aliases; retrieval scans the list in order
//! - **Object layout**: the TTL table is keyed directly by record type;
//!   retrieval is a single map access
//!
//! Run the comparison: `cargo run --release`
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod corpus;
pub mod layout;
pub mod loader;
pub mod report;
pub mod runner;
