// Finsight - AI-powered financial document analyzer

pub mod config;
pub mod types;
pub mod models;
pub mod tabular;
pub mod llm;
pub mod report;
pub mod render;
pub mod routes;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
