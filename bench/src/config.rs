use serde::Serialize;

use crate::error::BenchError;

pub const DEFAULT_SIZES: [usize; 10] = [100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];
pub const DEFAULT_TRIALS: usize = 50;
pub const DEFAULT_AVG_DEGREE: f64 = 6.0;
pub const DEFAULT_MIN_WEIGHT: u32 = 1;
pub const DEFAULT_MAX_WEIGHT: u32 = 10;
pub const DEFAULT_SEED: u64 = 42;

/// Largest network the generator will build (edge attempts grow as n²).
pub const MAX_STATIONS: usize = 1_000_000;

/// Algorithms the benchmark can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::Kruskal];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Kruskal => "kruskal",
        }
    }
}

/// Shape of the random networks: density and weight range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkShape {
    pub avg_degree: f64,
    pub min_weight: u32,
    pub max_weight: u32,
}

impl Default for NetworkShape {
    fn default() -> Self {
        Self {
            avg_degree: DEFAULT_AVG_DEGREE,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

/// Validated benchmark settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub algorithms: Vec<Algorithm>,
    pub sizes: Vec<usize>,
    pub trials: usize,
    pub shape: NetworkShape,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            shape: NetworkShape::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Check bounds; returns the config unchanged when it is usable.
    pub fn validate(self) -> Result<Self, BenchError> {
        if self.algorithms.is_empty() {
            return Err(BenchError::Config("no algorithm selected".into()));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::Config("sizes must not be empty".into()));
        }
        if let Some(&n) = self.sizes.iter().find(|&&n| !(2..=MAX_STATIONS).contains(&n)) {
            return Err(BenchError::Config(format!(
                "size {} out of range (2..={})",
                n, MAX_STATIONS
            )));
        }
        if self.trials == 0 {
            return Err(BenchError::Config("trials must be at least 1".into()));
        }
        if !self.shape.avg_degree.is_finite() || self.shape.avg_degree < 0.0 {
            return Err(BenchError::Config(format!(
                "avg_degree must be a non-negative number, got {}",
                self.shape.avg_degree
            )));
        }
        if self.shape.min_weight > self.shape.max_weight {
            return Err(BenchError::Config(format!(
                "min_weight {} exceeds max_weight {}",
                self.shape.min_weight, self.shape.max_weight
            )));
        }
        Ok(self)
    }
}
