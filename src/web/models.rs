use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::{PathResult, SearchStats};
use crate::graph::{AdjacencyGraph, Graph};

/// Graph as it travels over the wire: node -> (neighbor -> weight)
pub type WebGraph = HashMap<String, HashMap<String, f64>>;

/// Graph type the service queries
pub type RouteGraph = AdjacencyGraph<String, OrderedFloat<f64>>;

/// Body of `POST /api/graphs`
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub graph: WebGraph,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single start/end pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
}

/// Body of `POST /api/route`: graph and query in one request
#[derive(Debug, Deserialize)]
pub struct InlineRouteRequest {
    pub graph: WebGraph,
    pub start: String,
    pub end: String,
}

/// Body of `POST /api/graphs/:session_id/routes`
#[derive(Debug, Deserialize)]
pub struct BatchRouteRequest {
    pub queries: Vec<RouteRequest>,
}

/// Answer to a single route query
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub start: String,
    pub end: String,
    pub reachable: bool,
    /// `null` when the end is unreachable
    pub distance: Option<f64>,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<f64>,
}

impl RouteResponse {
    pub fn from_result(
        request: &RouteRequest,
        result: PathResult<String, OrderedFloat<f64>>,
    ) -> Self {
        Self {
            start: request.start.clone(),
            end: request.end.clone(),
            reachable: result.is_reachable(),
            distance: result.distance.finite().map(|d| d.into_inner()),
            path: result.path,
            stats: None,
            execution_time_ms: None,
        }
    }

    pub fn with_stats(mut self, stats: SearchStats, execution_time_ms: f64) -> Self {
        self.stats = Some(stats);
        self.execution_time_ms = Some(execution_time_ms);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct BatchRouteResponse {
    pub batch_id: Uuid,
    pub routes: Vec<RouteResponse>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
    pub timestamp: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// An uploaded graph kept around for repeated queries
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub name: Option<String>,
    pub graph: Arc<RouteGraph>,
    pub queries_served: usize,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: RouteGraph, name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            graph: Arc::new(graph),
            queries_served: 0,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            name: self.name.clone(),
            node_count: self.graph.nodes().len(),
            edge_count: self.graph.edge_count(),
            queries_served: self.queries_served,
            created_at: self.created_at,
        }
    }
}

/// What the API reports about a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub name: Option<String>,
    pub node_count: usize,
    pub edge_count: usize,
    pub queries_served: usize,
    pub created_at: DateTime<Utc>,
}
