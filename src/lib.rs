//! Fixed-input micro-benchmarks for cross-language timing comparisons.
//!
//! Every workload follows the same shape: construction does the untimed
//! setup, [`Workload::run`] is the timed region, and [`Workload::findings`]
//! reads the results back once the clock has stopped. The binaries under
//! `src/bin` each drive one workload through [`run_to`].

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod router;
pub mod workload;

use std::io::Write;
use std::process::ExitCode;

pub use clock::TimingSample;
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use report::Reporter;
pub use router::{Request, Router, NOT_FOUND};
pub use workload::{Finding, Workload};

/// Measures `workload` and writes its findings followed by the time line.
pub fn run_to<W: Write>(workload: &mut dyn Workload, out: W) -> Result<TimingSample> {
    let sample = workload::measure(workload);
    let mut reporter = Reporter::new(out);
    for finding in workload.findings() {
        reporter.finding(&finding)?;
    }
    reporter.time(workload.time_label(), sample.elapsed_secs())?;
    reporter.flush()?;
    Ok(sample)
}

/// Maps a program's outcome to its exit status. Errors go to stderr using
/// their display message.
pub fn exit_with(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = write_error(&err, std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

fn write_error<W: Write>(err: &BenchError, mut out: W) -> std::io::Result<()> {
    writeln!(out, "error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_print_their_message() {
        let mut out = Vec::new();
        write_error(&BenchError::UnknownWorkload("bogus".into()), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "error: unknown workload `bogus`\n");
    }
}
