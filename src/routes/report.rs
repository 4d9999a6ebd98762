use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use crate::models::{AppState, ReportResponse};
use crate::report::build_report;
use crate::tabular::{load_document, LoadOutcome};
use crate::types::DocumentKind;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/report", post(generate_report))
        .with_state(state)
}

fn slot_index(kind: DocumentKind) -> usize {
    match kind {
        DocumentKind::BalanceSheet => 0,
        DocumentKind::ProfitAndLoss => 1,
        DocumentKind::CashFlow => 2,
    }
}

/// Accept up to three optional file parts (`balance_sheet`, `profit_loss`,
/// `cash_flow`) and run the load -> summarize -> render pipeline over each
/// slot in order.
async fn generate_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ReportResponse>, StatusCode> {
    info!("Report request received");

    let mut slots: [LoadOutcome; 3] =
        [LoadOutcome::Absent, LoadOutcome::Absent, LoadOutcome::Absent];

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Malformed multipart body");
        StatusCode::BAD_REQUEST
    })? {
        let Some(kind) = field.name().and_then(DocumentKind::from_field_name) else {
            continue;
        };
        let filename = field.file_name().map(|s| s.to_string());
        let data = field.bytes().await.map_err(|e| {
            warn!(kind = %kind, error = %e, "Failed to read upload body");
            StatusCode::BAD_REQUEST
        })?;

        slots[slot_index(kind)] = load_document(filename.as_deref(), &data);
    }

    let documents = build_report(state.generator.as_ref(), slots).await;

    Ok(Json(ReportResponse {
        status: "success".to_string(),
        documents,
    }))
}
