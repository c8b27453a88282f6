use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::BenchError;

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` or `RAILGRAPH_LOG` override the level picked from the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), BenchError> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("RAILGRAPH_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("railgraph_bench={level},railgraph_core={level}")
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    let result = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    result.map_err(|err| BenchError::Logging(err.to_string()))
}
