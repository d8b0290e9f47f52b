use std::process::ExitCode;

use refbench::workload::Fibonacci;
use refbench::{logging, BenchConfig};

fn main() -> ExitCode {
    logging::init();
    refbench::exit_with(run())
}

fn run() -> refbench::Result<()> {
    let config = BenchConfig::default();
    let mut workload = Fibonacci::new(config.fib_input);
    refbench::run_to(&mut workload, std::io::stdout().lock())?;
    Ok(())
}
