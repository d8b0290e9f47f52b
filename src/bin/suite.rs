use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use refbench::{logging, workload, BenchConfig, Reporter};

/// Runs benchmark workloads in-process, one after the other.
#[derive(Parser, Debug)]
#[command(name = "suite", version)]
struct Cli {
    /// Workloads to run, in the given order. Runs all when empty.
    workloads: Vec<String>,

    /// Print the known workload names and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    refbench::exit_with(run(cli))
}

fn run(cli: Cli) -> refbench::Result<()> {
    let mut stdout = std::io::stdout().lock();

    if cli.list {
        for name in workload::NAMES {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let config = BenchConfig::default();
    let names: Vec<&str> = if cli.workloads.is_empty() {
        workload::NAMES.to_vec()
    } else {
        cli.workloads.iter().map(String::as_str).collect()
    };

    // Resolve every name up front so a typo fails before anything is timed.
    let mut selected = names
        .iter()
        .map(|name| workload::build(name, &config))
        .collect::<refbench::Result<Vec<_>>>()?;

    tracing::info!(count = selected.len(), "running suite");
    for bench in selected.iter_mut() {
        Reporter::new(&mut stdout).line(&format!("== {}", bench.name()))?;
        refbench::run_to(bench.as_mut(), &mut stdout)?;
    }
    Ok(())
}
