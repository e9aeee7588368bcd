//! Command line entry point: read an MPS file, solve it, print the solution.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use revex::interface::mps::read_mps;
use revex::{Error, simplex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Info,
    Debug,
}

#[derive(Debug, Parser)]
#[command(name = "revex", about = "A revised simplex linear programming solver.")]
struct Args {
    /// Log level
    #[arg(short = 'l', long = "log", value_enum, default_value = "info")]
    log: LogLevel,

    /// Path to MPS file
    #[arg(short = 'm', long = "mps")]
    mps: PathBuf,
}

fn init_logging(level: LogLevel) {
    let filter = match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let mut model = read_mps(&args.mps)?;
    info!("{model}");

    let result = simplex::solve(&mut model)?;

    match result.solution {
        Some(solution) => println!("{solution}"),
        None => info!("No solution found ({:?})", result.status),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Exception: {err}");
            ExitCode::FAILURE
        }
    }
}
