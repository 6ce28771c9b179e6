use clap::Parser;
use itertools::Itertools;
use statesearch::{
    config::{ConfigError, ProblemConfig, SolverConfig},
    puzzle::render_trace,
    search::{
        search_engines::{SearchEngineName, SearchResult},
        Verbosity,
    },
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Search a graph or a sliding-tile puzzle described by a TOML problem file.
struct Cli {
    #[arg(help = "The TOML problem file")]
    problem: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use, overriding the problem file",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "The random-restart hill climbing seed, overriding the problem file",
        short = 's',
        long = "seed",
        id = "SEED"
    )]
    seed: Option<u64>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match solve(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether a path was found.
fn solve(cli: &Cli) -> Result<bool, ConfigError> {
    let mut config = SolverConfig::from_path(&cli.problem)?;
    if let Some(engine) = cli.search_engine_name {
        config.search = config.search.with_engine(engine);
    }
    if let Some(seed) = cli.seed {
        config.search.seed = seed;
    }

    match &config.problem {
        ProblemConfig::Graph(graph) => {
            let (result, _) = graph.solve(&config.search)?;
            match result {
                SearchResult::Success(path) => {
                    info!(path_length = path.num_steps());
                    println!("Path found:");
                    println!("{}", path.iter().join(" -> "));
                    println!("Path cost: {}", path.cost());
                    println!("Path length: {}", path.num_steps());
                    Ok(true)
                }
                _ => {
                    info!("no path found");
                    println!("No path found: {:?}", result);
                    Ok(false)
                }
            }
        }
        ProblemConfig::Puzzle(puzzle) => {
            let (result, _) = puzzle.solve(&config.search)?;
            match result {
                SearchResult::Success(path) => {
                    info!(path_length = path.num_steps());
                    println!("Solution found:");
                    print!("{}", render_trace(&path));
                    println!("Moves: {}", path.num_steps());
                    Ok(true)
                }
                _ => {
                    info!("no solution found");
                    println!("No solution found: {:?}", result);
                    Ok(false)
                }
            }
        }
    }
}
