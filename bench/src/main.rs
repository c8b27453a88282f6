mod config;
mod error;
mod generators;
mod logging;
mod report;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use config::{Algorithm, BenchConfig, NetworkShape};
use error::BenchError;

/// Which algorithms to time.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// BFS, Dijkstra and Kruskal (default)
    All,
    /// Fewest-stops search
    Bfs,
    /// Fastest-journey search
    Dijkstra,
    /// Minimum spanning backbone
    Kruskal,
}

impl Mode {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Mode::All => Algorithm::ALL.to_vec(),
            Mode::Bfs => vec![Algorithm::Bfs],
            Mode::Dijkstra => vec![Algorithm::Dijkstra],
            Mode::Kruskal => vec![Algorithm::Kruskal],
        }
    }
}

/// Time railgraph-core algorithms on seeded random transit networks.
#[derive(Parser, Debug)]
#[command(name = "railgraph-bench", version)]
struct Cli {
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Network sizes (stations), comma separated [default: 100,200,...,1000]
    #[arg(long, value_delimiter = ',', env = "RAILGRAPH_SIZES")]
    sizes: Option<Vec<usize>>,

    /// Runs per network and algorithm
    #[arg(long, env = "RAILGRAPH_TRIALS", default_value_t = config::DEFAULT_TRIALS)]
    trials: usize,

    /// Target average station degree
    #[arg(long, default_value_t = config::DEFAULT_AVG_DEGREE)]
    avg_degree: f64,

    /// Smallest edge weight (journey minutes)
    #[arg(long, default_value_t = config::DEFAULT_MIN_WEIGHT)]
    min_weight: u32,

    /// Largest edge weight (journey minutes)
    #[arg(long, default_value_t = config::DEFAULT_MAX_WEIGHT)]
    max_weight: u32,

    /// Seed for network generation and source selection
    #[arg(long, env = "RAILGRAPH_SEED", default_value_t = config::DEFAULT_SEED)]
    seed: u64,

    /// Print reports as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn to_config(&self) -> Result<BenchConfig, BenchError> {
        BenchConfig {
            algorithms: self.mode.algorithms(),
            sizes: self
                .sizes
                .clone()
                .unwrap_or_else(|| config::DEFAULT_SIZES.to_vec()),
            trials: self.trials,
            shape: NetworkShape {
                avg_degree: self.avg_degree,
                min_weight: self.min_weight,
                max_weight: self.max_weight,
            },
            seed: self.seed,
        }
        .validate()
    }
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    let config = cli.to_config()?;
    tracing::info!(?config, "starting benchmark");

    let reports = report::run_benchmarks(&config)?;

    if cli.json {
        println!("{}", report::render_json(&reports)?);
    } else {
        println!("railgraph-bench");
        println!("===============");
        println!(
            "avg degree {} | weights {}..={} | trials {} | seed {}",
            config.shape.avg_degree,
            config.shape.min_weight,
            config.shape.max_weight,
            config.trials,
            config.seed
        );
        println!();
        print!("{}", report::render_table(&reports));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("railgraph-bench: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "benchmark failed");
            eprintln!("railgraph-bench: {}", err);
            ExitCode::FAILURE
        }
    }
}
