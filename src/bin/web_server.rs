use shortest_route::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid port {:?}, using {}", raw, defaults.port);
            defaults.port
        }),
        None => defaults.port,
    };

    let config = ServerConfig { port, ..defaults };

    println!("Starting route server...");
    println!("   Address: http://{}", config.addr());
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!();

    start_server(config).await?;

    Ok(())
}
