use std::process::ExitCode;

use refbench::workload::Primes;
use refbench::{logging, BenchConfig};

fn main() -> ExitCode {
    logging::init();
    refbench::exit_with(run())
}

fn run() -> refbench::Result<()> {
    let config = BenchConfig::default();
    let mut workload = Primes::new(config.prime_limit);
    refbench::run_to(&mut workload, std::io::stdout().lock())?;
    Ok(())
}
