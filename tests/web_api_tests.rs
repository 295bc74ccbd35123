use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use shortest_route::web::api::{
    batch_in_session, create_session, get_session, health_check, list_sessions, route_in_session,
    route_inline, AppState,
};
use shortest_route::web::models::{
    BatchRouteRequest, CreateSessionRequest, InlineRouteRequest, RouteRequest, WebGraph,
};
use uuid::Uuid;

fn letter_graph() -> WebGraph {
    serde_json::from_value(json!({
        "A": {"B": 1, "D": 2},
        "B": {"C": 4, "E": 1},
        "C": {},
        "D": {"E": 5},
        "E": {"C": 3}
    }))
    .unwrap()
}

fn route(start: &str, end: &str) -> RouteRequest {
    RouteRequest {
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[tokio::test]
async fn test_inline_route() {
    let request = InlineRouteRequest {
        graph: letter_graph(),
        start: "A".to_string(),
        end: "C".to_string(),
    };
    let Json(response) = route_inline(Json(request)).await.unwrap();

    assert!(response.reachable);
    assert_eq!(response.distance, Some(5.0));
    assert_eq!(response.path.first().map(String::as_str), Some("A"));
    assert_eq!(response.path.last().map(String::as_str), Some("C"));
    assert!(response.stats.is_some());
}

#[tokio::test]
async fn test_inline_route_unreachable_serializes_null_distance() {
    let request = InlineRouteRequest {
        graph: letter_graph(),
        start: "C".to_string(),
        end: "A".to_string(),
    };
    let Json(response) = route_inline(Json(request)).await.unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["reachable"], json!(false));
    assert_eq!(value["distance"], json!(null));
    assert_eq!(value["path"], json!([]));
}

#[tokio::test]
async fn test_negative_weight_is_rejected() {
    let graph: WebGraph = serde_json::from_value(json!({"A": {"B": -1.0}})).unwrap();
    let request = InlineRouteRequest {
        graph,
        start: "A".to_string(),
        end: "B".to_string(),
    };
    let (status, Json(error)) = route_inline(Json(request)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "invalid_graph");
}

#[tokio::test]
async fn test_session_lifecycle() {
    let state = AppState::new(10);

    let Json(summary) = create_session(
        State(state.clone()),
        Json(CreateSessionRequest {
            graph: letter_graph(),
            name: Some("letters".to_string()),
        }),
    )
    .await
    .unwrap();
    assert_eq!(summary.node_count, 5);
    assert_eq!(summary.edge_count, 6);

    let Json(response) =
        route_in_session(State(state.clone()), Path(summary.id), Json(route("A", "A")))
            .await
            .unwrap();
    assert_eq!(response.distance, Some(0.0));
    assert_eq!(response.path, vec!["A"]);

    let Json(batch) = batch_in_session(
        State(state.clone()),
        Path(summary.id),
        Json(BatchRouteRequest {
            queries: vec![route("A", "C"), route("C", "A"), route("A", "E")],
        }),
    )
    .await
    .unwrap();
    let distances: Vec<Option<f64>> = batch.routes.iter().map(|r| r.distance).collect();
    assert_eq!(distances, vec![Some(5.0), None, Some(2.0)]);

    let Json(session) = get_session(State(state.clone()), Path(summary.id)).await.unwrap();
    assert_eq!(session.queries_served, 4);
    assert_eq!(session.name.as_deref(), Some("letters"));

    let Json(all) = list_sessions(State(state.clone())).await.unwrap();
    assert_eq!(all.len(), 1);

    let Json(health) = health_check(State(state)).await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.sessions, 1);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let state = AppState::new(10);
    let unknown = Path(Uuid::new_v4());
    let (status, Json(error)) = route_in_session(State(state), unknown, Json(route("A", "B")))
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, "session_not_found");
}

#[tokio::test]
async fn test_session_limit() {
    let state = AppState::new(1);
    let request = || CreateSessionRequest {
        graph: letter_graph(),
        name: None,
    };

    assert!(create_session(State(state.clone()), Json(request())).await.is_ok());
    let (status, _) = create_session(State(state), Json(request())).await.unwrap_err();
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}
