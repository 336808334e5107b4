//! `gatesolver` command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use gatesolver::{load_map, GateSolverError, Solver, SolverConfig, StrategyType};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "gatesolver", version)]
#[command(about = "Find a shortest move sequence covering every goal of a puzzle map")]
struct Cli {
    /// Map file to solve
    map: PathBuf,

    /// Search strategy (overrides the config file)
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Solver config file, TOML or YAML by extension
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest width iterated width search may try
    #[arg(long)]
    max_width: Option<usize>,

    /// Print the winning board after the report
    #[arg(long)]
    print_board: bool,

    /// Skip console logging
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    PlainBfs,
    MemoizedBfs,
    IteratedWidth,
}

impl From<StrategyArg> for StrategyType {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::PlainBfs => StrategyType::PlainBfs,
            StrategyArg::MemoizedBfs => StrategyType::MemoizedBfs,
            StrategyArg::IteratedWidth => StrategyType::IteratedWidth,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<SolverConfig, GateSolverError> {
    let mut config = match &cli.config {
        Some(path) => {
            SolverConfig::load(path).map_err(|e| GateSolverError::Config(e.to_string()))?
        }
        None => SolverConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config = config.with_strategy(strategy.into());
    }
    if let Some(max_width) = cli.max_width {
        config = config.with_max_width(max_width);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), GateSolverError> {
    let config = load_config(cli)?;
    if !cli.quiet {
        gatesolver::console::init();
    }

    let initial = load_map(&cli.map)?;
    let report = Solver::new(config).solve(&initial)?;

    print!("{report}");
    if cli.print_board {
        if let Some(solution) = &report.solution {
            println!();
            print!("{solution}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "gatesolver",
            "map.txt",
            "--strategy",
            "memoized-bfs",
            "--max-width",
            "2",
            "-q",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.strategy, StrategyType::MemoizedBfs);
        assert_eq!(config.max_width(), Some(2));
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["gatesolver", "map.txt", "-c", "does-not-exist.toml"]);
        assert!(matches!(load_config(&cli), Err(GateSolverError::Config(_))));
    }
}
