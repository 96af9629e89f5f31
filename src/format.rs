//! Number formatting shared by the CLI views.
//!
//! Mirrors how the site renders package metrics: grouped download counts,
//! two-decimal objectives and runtimes, and gaps as one-decimal percentages.

use crate::models::BenchmarkResult;

/// Placeholder shown for values that were not computed.
pub const MISSING: &str = "—";

/// `1234567` -> `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}

pub fn format_objective(bench: &BenchmarkResult) -> String {
    bench
        .objective
        .map(|o| format!("{:.2}", o))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn format_runtime(bench: &BenchmarkResult) -> String {
    format!("{:.2}", bench.runtime)
}

pub fn format_gap(bench: &BenchmarkResult) -> String {
    bench
        .gap
        .map(|g| format!("{:.1}%", g * 100.0))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn format_feasible(bench: &BenchmarkResult) -> &'static str {
    if bench.feasible {
        "yes"
    } else {
        "no"
    }
}
