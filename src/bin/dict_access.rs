use std::process::ExitCode;

use refbench::workload::DictAccess;
use refbench::{logging, BenchConfig};

fn main() -> ExitCode {
    logging::init();
    refbench::exit_with(run())
}

fn run() -> refbench::Result<()> {
    let config = BenchConfig::default();
    let mut workload = DictAccess::new(config.dict_entries);
    refbench::run_to(&mut workload, std::io::stdout().lock())?;
    Ok(())
}
