use std::any::Any;
use std::net::SocketAddr;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use sqlx::PgPool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::error::ApiError;
use crate::api::handlers::consistency::{
    list_consistency_checks_handler, run_consistency_check_handler,
};
use crate::api::handlers::identity::{
    create_identity_handler, export_identity_handler, identity_details_handler,
    list_identities_handler, search_identities_handler, trust_history_handler,
};
use crate::api::handlers::reputation::log_reputation_event_handler;
use crate::api::handlers::system::{health_handler, statistics_handler};
use crate::api::handlers::verification::{add_verification_handler, list_verifications_handler};
use crate::config::AppConfig;
use crate::db::connection::create_pool;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn,tower=warn")),
        )
        .init();
}

/// Build the full route table over a connection pool. Kept separate from
/// startup so tests can drive the router directly.
pub fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/api/statistics", get(statistics_handler))
        .route("/api/identity", post(create_identity_handler))
        .route("/api/identities", get(list_identities_handler))
        .route("/api/identities/search", get(search_identities_handler))
        .route("/api/identity/{anchor_id}", get(identity_details_handler))
        .route(
            "/api/identity/{anchor_id}/export",
            get(export_identity_handler),
        )
        .route(
            "/api/identity/{anchor_id}/history",
            get(trust_history_handler),
        )
        .route("/api/verification", post(add_verification_handler))
        .route("/api/verifications", get(list_verifications_handler))
        .route(
            "/api/consistency-check",
            post(run_consistency_check_handler),
        )
        .route(
            "/api/consistency-checks",
            get(list_consistency_checks_handler),
        )
        .route(
            "/api/reputation-event",
            post(log_reputation_event_handler),
        )
        .route("/api/health", get(health_handler))
        .fallback(endpoint_not_found)
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Any route outside the table gets the uniform 404 envelope.
async fn endpoint_not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// A panicking handler becomes the uniform 500 envelope instead of a
/// dropped connection. The panic payload goes to the log, not the caller.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Unhandled panic while serving request: {}", detail);

    ApiError::Internal("Internal server error".to_string()).into_response()
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing();

    info!("Identity Anchor Registry - starting up");

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config).await?;
    let app = app(pool);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);
    info!("API endpoints available under http://{}/api/", addr);

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
