use railgraph_core::GraphError;
use thiserror::Error;

/// Errors that stop a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
