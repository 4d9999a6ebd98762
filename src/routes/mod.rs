//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/report` - Upload documents and generate the analysis report
//! - `/api/health` - Health checks
//! - `/` - The single-page upload UI

pub mod health;
pub mod report;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(report::router(state))
        .merge(health::router())
        .merge(ui::router())
        .layer(TraceLayer::new_for_http())
}
