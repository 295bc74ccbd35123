use axum::{
    http::{header, Method},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Assemble the router with state and middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app = create_router().with_state(AppState::new(config.max_sessions));

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);
    let addr = config.addr();

    log::info!("Route server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
