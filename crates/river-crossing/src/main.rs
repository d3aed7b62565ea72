//! CLI entry point for the river-crossing solver.
//!
//! Usage:
//!   river-crossing [--json]
//!
//! The puzzle is fixed: three guards and three prisoners start on the
//! original shore with the boat. Any other argument is a usage error
//! (exit status 2).

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use river_crossing::{
    breadth_first_tree_search, format_result, progress_line, write_json, write_text, Result,
    SolverConfig, State, Timer,
};

#[derive(Parser)]
#[command(name = "river-crossing")]
#[command(about = "Shortest solution to the guards and prisoners river crossing")]
#[command(version)]
struct Cli {
    /// Print the outcome as a JSON document instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let timer = Timer::start();
    let cli = Cli::parse();

    init_tracing();

    match run(&cli, &timer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout only carries the report
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli, timer: &Timer) -> Result<()> {
    let config = SolverConfig::default();

    let result = breadth_first_tree_search(State::initial(), &config, |depth| {
        if !cli.json {
            println!("{}", progress_line(depth, timer.elapsed()));
        }
    });

    let mut stdout = io::stdout().lock();
    if cli.json {
        let report = format_result(&result, timer.elapsed());
        write_json(&mut stdout, &report)?;
    } else {
        write_text(&mut stdout, &result, timer)?;
    }

    Ok(())
}
