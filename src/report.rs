//! Report module: renders the fixed-format comparison summary.
//!
//! The report is the program's contract with whatever parses its output, so
//! rendering is separated from printing and covered by exact-string tests.

use std::fmt::Write as _;

use crate::runner::LayoutRun;

/// Results of a full comparison run: one record type, both layouts.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub record_type: String,
    pub iterations: u64,
    pub array: LayoutRun,
    pub object: LayoutRun,
}

impl BenchReport {
    /// Array total time over object total time. Greater than one means the
    /// keyed object was faster. Meaningless when the object run measured
    /// zero elapsed time.
    pub fn speedup(&self) -> f64 {
        self.array.total_ms() / self.object.total_ms()
    }

    /// Render the report, trailing newline included.
    pub fn render(&self) -> String {
        let banner = "=".repeat(60);
        let mut out = String::new();

        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out, "RUST PERFORMANCE TEST");
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out, "Record Type: {}", self.record_type);
        let _ = writeln!(out, "Iterations: {}", group_thousands(self.iterations));
        render_layout(&mut out, "Array Approach", &self.array);
        render_layout(&mut out, "Object Approach", &self.object);
        let speedup = self.speedup();
        let _ = writeln!(out);
        let _ = writeln!(out, "Speedup: {speedup:.2}x (object is {speedup:.2}x faster)");
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out);
        out
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

fn render_layout(out: &mut String, label: &str, run: &LayoutRun) {
    let ttl = match run.ttl {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    };
    let _ = writeln!(out);
    let _ = writeln!(out, "{label}:");
    let _ = writeln!(out, "  TTL Retrieved: {ttl}");
    let _ = writeln!(out, "  Total Time: {:.2} ms", run.total_ms());
    let _ = writeln!(out, "  Avg Time: {:.4} µs/op", run.avg_us_per_op());
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
//  Unit Tests
// ---------------------------------------------------------------------------
