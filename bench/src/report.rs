use std::hint::black_box;
use std::time::Instant;

use railgraph_core::{bfs, dijkstra, kruskal, Graph};
use serde::Serialize;

use crate::config::{Algorithm, BenchConfig};
use crate::error::BenchError;
use crate::generators::{random_connected, FastRng};

/// Average running time of one algorithm on one generated network.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub stations: usize,
    pub edges: usize,
    pub trials: usize,
    pub avg_ms: f64,
    pub memory_bytes: usize,
}

/// Build one network per size and time every selected algorithm on it.
///
/// A single RNG seeded from the config drives generation and source
/// selection, so a given config always measures the same graphs.
pub fn run_benchmarks(config: &BenchConfig) -> Result<Vec<Report>, BenchError> {
    let mut rng = FastRng::new(config.seed);
    let mut reports = Vec::with_capacity(config.sizes.len() * config.algorithms.len());

    for &stations in &config.sizes {
        let t = Instant::now();
        let graph = random_connected(stations, &config.shape, &mut rng)?;
        tracing::info!(
            stations,
            edges = graph.edge_count(),
            elapsed_ms = t.elapsed().as_secs_f64() * 1000.0,
            "network generated"
        );

        for &algorithm in &config.algorithms {
            let avg_ms = time_algorithm(&graph, algorithm, config.trials, &mut rng)?;
            reports.push(Report {
                algorithm,
                stations,
                edges: graph.edge_count(),
                trials: config.trials,
                avg_ms,
                memory_bytes: graph.memory_usage(),
            });
        }
    }

    Ok(reports)
}

fn time_algorithm(
    graph: &Graph,
    algorithm: Algorithm,
    trials: usize,
    rng: &mut FastRng,
) -> Result<f64, BenchError> {
    let mut total_ms = 0.0;

    for _ in 0..trials {
        let source = rng.vertex(graph.vertex_count());
        let t = Instant::now();
        match algorithm {
            Algorithm::Bfs => {
                black_box(bfs(graph, source)?);
            }
            Algorithm::Dijkstra => {
                black_box(dijkstra(graph, source)?);
            }
            Algorithm::Kruskal => {
                black_box(kruskal(graph));
            }
        }
        total_ms += t.elapsed().as_secs_f64() * 1000.0;
    }

    Ok(total_ms / trials as f64)
}

/// Render reports as an aligned table, grouped by algorithm.
pub fn render_table(reports: &[Report]) -> String {
    let mut out = String::new();

    for algorithm in Algorithm::ALL {
        let rows: Vec<&Report> = reports.iter().filter(|r| r.algorithm == algorithm).collect();
        if rows.is_empty() {
            continue;
        }

        out.push_str(&format!("--- {} ---\n", algorithm.name()));
        out.push_str(&format!(
            "{:>10} {:>10} {:>8} {:>12} {:>10}\n",
            "stations", "edges", "trials", "avg time", "memory"
        ));
        out.push_str(&format!(
            "{:->10} {:->10} {:->8} {:->12} {:->10}\n",
            "", "", "", "", ""
        ));
        for r in rows {
            out.push_str(&format!(
                "{:>10} {:>10} {:>8} {:>10.3}ms {:>8.1}KB\n",
                r.stations,
                r.edges,
                r.trials,
                r.avg_ms,
                r.memory_bytes as f64 / 1024.0
            ));
        }
        out.push('\n');
    }

    out
}

pub fn render_json(reports: &[Report]) -> Result<String, BenchError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
