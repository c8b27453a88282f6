//! Impact analysis: how much longer a journey gets when a network is cut
//! down to its backbone.

use crate::dijkstra::dijkstra;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

/// A concrete journey: the vertices visited and its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Vec<VertexId>,
    pub cost: Weight,
}

/// Fastest routes between the same two vertices on two networks.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteComparison {
    pub source: VertexId,
    pub target: VertexId,
    /// Route on the full network, `None` if unreachable.
    pub full: Option<Route>,
    /// Route on the backbone network, `None` if unreachable.
    pub backbone: Option<Route>,
}

impl RouteComparison {
    /// Backbone cost minus full-network cost, when both routes exist.
    pub fn extra_cost(&self) -> Option<Weight> {
        match (&self.full, &self.backbone) {
            (Some(full), Some(backbone)) => Some(backbone.cost - full.cost),
            _ => None,
        }
    }

    /// Whether closing the non-backbone edges disconnects this journey.
    pub fn disconnected_by_backbone(&self) -> bool {
        self.full.is_some() && self.backbone.is_none()
    }
}

fn fastest_route(graph: &Graph, source: VertexId, target: VertexId) -> Result<Option<Route>> {
    let result = dijkstra(graph, source)?;
    Ok(result.distance(target).map(|cost| Route {
        path: result.path_to(target),
        cost,
    }))
}

/// Compare the fastest `source → target` journey on `full` and on `backbone`
/// (typically `kruskal(full)`).
///
/// Both graphs must cover the same vertices.
#[tracing::instrument(skip(full, backbone))]
pub fn compare_routes(
    full: &Graph,
    backbone: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<RouteComparison> {
    if full.vertex_count() != backbone.vertex_count() {
        return Err(GraphError::VertexCountMismatch {
            left: full.vertex_count(),
            right: backbone.vertex_count(),
        });
    }
    full.check_vertex(target)?;

    let comparison = RouteComparison {
        source,
        target,
        full: fastest_route(full, source, target)?,
        backbone: fastest_route(backbone, source, target)?,
    };

    tracing::debug!(extra_cost = ?comparison.extra_cost(), "route comparison complete");
    Ok(comparison)
}
