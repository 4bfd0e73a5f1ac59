//! Visitor Check-in Kiosk Server

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiosk_server::{
    api,
    config::{AppConfig, StoreBackend},
    pages,
    services::Services,
    store::{DocumentStore, HttpDocumentStore, MemoryDocumentStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("kiosk_server={},tower_http=debug", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Kiosk Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect the document store backend
    let store: Arc<dyn DocumentStore> = match config.store.backend {
        StoreBackend::Http => {
            tracing::info!("Using HTTP document store at {}", config.store.base_url);
            Arc::new(HttpDocumentStore::new(&config.store).expect("Failed to build store client"))
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    if config.tenant.school_id.is_none() {
        tracing::warn!("No school_id configured; every write will be rejected");
    }

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(store)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Kiosk pages
    let kiosk = Router::new()
        .route("/", get(pages::landing::landing))
        .route("/test-qr", get(pages::test_qr::test_qr))
        .route("/visitor/form", get(pages::form::show_form))
        .route("/visitor/form", post(pages::form::submit_form))
        .route("/visitor/scan", get(pages::scan::scan_intake))
        .with_state(state.clone());

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Visitors
        .route("/visitors", post(api::visitors::create_visitor))
        .route("/visitors/:id", get(api::visitors::get_visitor))
        .route("/visitors/:id", put(api::visitors::update_visitor))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(kiosk)
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
