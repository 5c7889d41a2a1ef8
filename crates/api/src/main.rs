use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use callboard_api::config::{LogFormat, ServerConfig};
use callboard_api::invalidation::InvalidationRouter;
use callboard_api::router::build_app_router;
use callboard_api::state::AppState;
use callboard_api::ws;
use callboard_events::EventBus;
use callboard_functions::FunctionsClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "callboard_api=debug,callboard_db=info,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    match LogFormat::from_env() {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = callboard_db::create_pool(&database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!(max_connections = config.db_max_connections, "Database connection pool created");

    callboard_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    callboard_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Remote functions ---
    let functions = config.functions.clone().map(|fc| {
        tracing::info!(url = %fc.base_url, "Remote functions enabled");
        FunctionsClient::new(fc).expect("Failed to build functions HTTP client")
    });

    // --- WebSocket manager + heartbeat ---
    let ws_manager = Arc::new(ws::WsManager::new());
    let heartbeat_handle = ws::start_heartbeat(Arc::clone(&ws_manager));

    // --- Event bus + invalidation fan-out ---
    let event_bus = Arc::new(EventBus::default());
    let invalidation_router = InvalidationRouter::new(Arc::clone(&ws_manager));
    let router_handle = tokio::spawn(invalidation_router.run(event_bus.subscribe()));
    tracing::info!("Invalidation router started");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::clone(&ws_manager),
        event_bus: Arc::clone(&event_bus),
        functions,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // The router exits once the last bus sender is gone; the state clones
    // inside the router were dropped with `axum::serve`.
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), router_handle).await;

    ws_manager.shutdown_all().await;
    heartbeat_handle.abort();

    tracing::info!("Graceful shutdown complete");
}

/// Wait for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
