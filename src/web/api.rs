use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::batch::find_shortest_paths;
use crate::algorithm::dijkstra::Dijkstra;
use crate::web::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_unavailable",
                "Session store is unavailable".to_string(),
            )
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/route", post(route_inline))
        .route("/api/graphs", post(create_session).get(list_sessions))
        .route("/api/graphs/:session_id", get(get_session))
        .route("/api/graphs/:session_id/route", post(route_in_session))
        .route("/api/graphs/:session_id/routes", post(batch_in_session))
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

/// Builds the query graph and rejects negative weights, which the engine
/// would silently mishandle.
fn build_graph(graph: WebGraph) -> Result<RouteGraph, ApiError> {
    let graph = RouteGraph::from_raw(graph);
    graph.validate_non_negative().map_err(|err| {
        log::warn!("Rejected graph: {}", err);
        error_response(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string())
    })?;
    Ok(graph)
}

fn session_not_found(session_id: Uuid) -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

fn run_route(graph: &RouteGraph, request: &RouteRequest) -> RouteResponse {
    let start_time = Instant::now();
    let (result, stats) = Dijkstra::new().search(graph, &request.start, &request.end);
    let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    RouteResponse::from_result(request, result).with_stats(stats, elapsed_ms)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let sessions = state.sessions()?.len();
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        sessions,
        timestamp: Utc::now(),
    }))
}

/// One-shot query: graph and endpoints in the same request
pub async fn route_inline(
    Json(request): Json<InlineRouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let graph = build_graph(request.graph)?;
    let query = RouteRequest {
        start: request.start,
        end: request.end,
    };
    Ok(Json(run_route(&graph, &query)))
}

/// Store a graph for repeated queries
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionSummary>, ApiError> {
    let graph = build_graph(request.graph)?;
    let session = Session::new(graph, request.name);
    let summary = session.summary();

    let mut sessions = state.sessions()?;
    if sessions.len() >= state.max_sessions {
        return Err(error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "session_limit",
            format!("At most {} sessions may be open", state.max_sessions),
        ));
    }
    sessions.insert(session.id, session);

    log::info!(
        "Created session {} ({} nodes, {} edges)",
        summary.id,
        summary.node_count,
        summary.edge_count
    );
    Ok(Json(summary))
}

pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.sessions()?;
    let mut summaries: Vec<_> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let sessions = state.sessions()?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.summary()))
        .ok_or_else(|| session_not_found(session_id))
}

/// Looks up the session graph and counts the queries about to run on it
fn checkout_graph(
    state: &AppState,
    session_id: Uuid,
    queries: usize,
) -> Result<Arc<RouteGraph>, ApiError> {
    let mut sessions = state.sessions()?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;
    session.queries_served += queries;
    Ok(Arc::clone(&session.graph))
}

/// Route between two nodes of a stored graph
pub async fn route_in_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let graph = checkout_graph(&state, session_id, 1)?;
    Ok(Json(run_route(&graph, &request)))
}

/// Answer many queries against a stored graph at once
pub async fn batch_in_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<BatchRouteRequest>,
) -> Result<Json<BatchRouteResponse>, ApiError> {
    let graph = checkout_graph(&state, session_id, request.queries.len())?;

    let start_time = Instant::now();
    let queries = request.queries;
    let routes = tokio::task::spawn_blocking(move || {
        let pairs: Vec<(String, String)> = queries
            .iter()
            .map(|query| (query.start.clone(), query.end.clone()))
            .collect();
        let results = find_shortest_paths(graph.as_ref(), &pairs);
        queries
            .iter()
            .zip(results)
            .map(|(query, result)| RouteResponse::from_result(query, result))
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|err| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "batch_failed",
            format!("Batch execution failed: {}", err),
        )
    })?;

    Ok(Json(BatchRouteResponse {
        batch_id: Uuid::new_v4(),
        routes,
        execution_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
    }))
}
