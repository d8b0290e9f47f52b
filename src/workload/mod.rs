//! Benchmark workloads and the registry the suite resolves names against.

mod array_ops;
mod collatz;
mod dict_access;
mod fib;
mod http_sim;
mod matrix_mul;
mod nbody;
mod primes;

use std::fmt::Display;

pub use array_ops::ArrayOps;
pub use collatz::{collatz_steps, Collatz};
pub use dict_access::DictAccess;
pub use fib::{fib, Fibonacci};
pub use http_sim::HttpSim;
pub use matrix_mul::MatrixMul;
pub use nbody::{advance, Body, NBody};
pub use primes::{is_prime, Primes};

use crate::clock::{self, TimingSample};
use crate::{BenchConfig, BenchError, Result};

/// One fixed-input benchmark.
///
/// Construction is the untimed setup. [`run`](Workload::run) is the only
/// part inside the clock; [`findings`](Workload::findings) is read after
/// the clock stops and is empty until `run` has completed.
pub trait Workload {
    fn name(&self) -> &'static str;

    /// Label of the elapsed-time line.
    fn time_label(&self) -> &'static str {
        "Time"
    }

    fn run(&mut self);

    fn findings(&self) -> Vec<Finding>;
}

/// A labelled result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub label: String,
    pub value: Option<String>,
}

impl Finding {
    pub fn new(label: impl Into<String>, value: impl Display) -> Self {
        Self {
            label: label.into(),
            value: Some(value.to_string()),
        }
    }

    /// A bare line with no value part.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }
}

/// Runs `workload` between two clock captures.
pub fn measure(workload: &mut dyn Workload) -> TimingSample {
    let start = clock::now();
    workload.run();
    let sample = TimingSample::finish(start);
    tracing::debug!(
        workload = workload.name(),
        elapsed_secs = sample.elapsed_secs(),
        "workload finished"
    );
    sample
}

/// Workload names in the order the suite runs them.
pub const NAMES: [&str; 8] = [
    "fib",
    "http_sim",
    "collatz",
    "primes",
    "dict_access",
    "array_ops",
    "matrix_mul",
    "nbody",
];

/// Builds the workload registered under `name`.
pub fn build(name: &str, config: &BenchConfig) -> Result<Box<dyn Workload>> {
    let workload: Box<dyn Workload> = match name {
        "fib" => Box::new(Fibonacci::new(config.fib_input)),
        "http_sim" => Box::new(HttpSim::new(config.dispatch_iterations)),
        "collatz" => Box::new(Collatz::new(config.collatz_limit)),
        "primes" => Box::new(Primes::new(config.prime_limit)),
        "dict_access" => Box::new(DictAccess::new(config.dict_entries)),
        "array_ops" => Box::new(ArrayOps::new(config.array_len)),
        "matrix_mul" => Box::new(MatrixMul::new(config.matrix_size)),
        "nbody" => Box::new(NBody::new(config.nbody_steps, config.nbody_dt)),
        other => return Err(BenchError::UnknownWorkload(other.to_string())),
    };
    Ok(workload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_builds() {
        let config = BenchConfig::default();
        for name in NAMES {
            let workload = build(name, &config).unwrap();
            assert_eq!(workload.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = build("quicksort", &BenchConfig::default()).err().unwrap();
        assert!(matches!(err, BenchError::UnknownWorkload(ref n) if n == "quicksort"));
        assert_eq!(err.to_string(), "unknown workload `quicksort`");
    }

    #[test]
    fn findings_appear_only_after_run() {
        let mut workload = Fibonacci::new(10);
        assert!(workload.findings().is_empty());
        let sample = measure(&mut workload);
        assert!(sample.elapsed_secs() >= 0.0);
        assert_eq!(workload.findings(), vec![Finding::new("Fibonacci(10)", 55)]);
    }
}
