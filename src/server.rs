use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{artifacts::PriceModel, config::ServerConfig, handlers};

/// Start the prediction service
///
/// This function:
/// 1. Loads the model artifacts
/// 2. Creates the Axum application
/// 3. Binds to the configured address
/// 4. Serves requests until Ctrl-C
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let model = PriceModel::load(Path::new(&config.artifacts_dir))?;

    let app = create_router(handlers::AppState {
        model: Arc::new(model),
    });

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    info!("Starting prediction server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/get_location_names", get(handlers::get_location_names))
        .route("/predict_home_price", post(handlers::predict_home_price))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // The form is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
