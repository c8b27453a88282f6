use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Errors raised by graph construction and algorithm entry points.
///
/// Every variant is local and recoverable. Unreachable vertices are not
/// errors: traversals report them with an infinite distance instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid vertex count {requested} (at most {max} vertices are supported)")]
    InvalidSize { requested: usize, max: usize },

    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: VertexId, to: VertexId },

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },

    #[error("edge {from} -> {to} has non-finite weight {weight}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },

    #[error("graphs have different vertex counts ({left} vs {right})")]
    VertexCountMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
