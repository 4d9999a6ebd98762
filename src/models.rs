use std::sync::Arc;

use crate::config::Config;
use crate::llm::TextGenerator;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: Arc<dyn TextGenerator>,
}

/// One analyzed document slot: the fixed label, the summary text (completion,
/// "No data found.", or "AI Error: ..."), and the rendered table/chart panel.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DocumentReport {
    pub label: String,
    pub summary: String,
    pub panel_html: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportResponse {
    pub status: String,
    pub documents: Vec<DocumentReport>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
