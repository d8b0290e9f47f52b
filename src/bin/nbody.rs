use std::process::ExitCode;

use refbench::workload::NBody;
use refbench::{logging, BenchConfig};

fn main() -> ExitCode {
    logging::init();
    refbench::exit_with(run())
}

fn run() -> refbench::Result<()> {
    let config = BenchConfig::default();
    let mut workload = NBody::new(config.nbody_steps, config.nbody_dt);
    refbench::run_to(&mut workload, std::io::stdout().lock())?;
    Ok(())
}
