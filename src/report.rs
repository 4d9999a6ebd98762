// Document summarization: prompt construction and the per-slot pipeline

use tracing::{info, warn};

use crate::llm::TextGenerator;
use crate::models::DocumentReport;
use crate::render::render_panel;
use crate::tabular::{LoadOutcome, TabularDocument};
use crate::types::DocumentKind;

pub const NO_DATA_MESSAGE: &str = "No data found.";

/// Serialize a table into the key/value text block embedded in the prompt:
/// one `column: [v1, v2, ...]` line per column.
pub fn describe_table(doc: &TabularDocument) -> String {
    let mut out = String::new();
    for column in &doc.columns {
        let values: Vec<String> = column.cells.iter().map(|c| c.display()).collect();
        out.push_str(&format!("{}: [{}]\n", column.name, values.join(", ")));
    }
    out
}

pub fn build_prompt(doc: &TabularDocument, kind: DocumentKind) -> String {
    format!(
        "You are a professional financial analyst.\n\
         \n\
         Document Type: {label}\n\
         \n\
         Analyze the following data:\n\
         \n\
         {data}\n\
         Provide:\n\
         - Key Metrics\n\
         - Trends\n\
         - Risks\n\
         - Financial Health\n\
         - Recommendations\n\
         \n\
         Give a clear summary.",
        label = kind.label(),
        data = describe_table(doc)
    )
}

/// Produce the summary text for one document slot.
///
/// Absent or unparseable documents short-circuit to the fixed no-data
/// message without touching the remote service. Remote failures are absorbed
/// into an "AI Error: ..." string; this function never errors and never
/// returns an empty string.
pub async fn summarize(
    generator: &dyn TextGenerator,
    outcome: &LoadOutcome,
    kind: DocumentKind,
) -> String {
    let doc = match outcome {
        LoadOutcome::Loaded(doc) => doc,
        LoadOutcome::Absent => return NO_DATA_MESSAGE.to_string(),
        LoadOutcome::Failed(reason) => {
            // Presented like an absent upload, but the failure is not silent.
            warn!(kind = %kind, %reason, "Document failed to load");
            return NO_DATA_MESSAGE.to_string();
        }
    };

    let prompt = build_prompt(doc, kind);
    match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(kind = %kind, error = %e, "Summarization failed");
            format!("AI Error: {}", e)
        }
    }
}

/// Run the full pipeline over the three slots: summarize each in order, then
/// render its table/chart panel. Strictly sequential; one slot's failure
/// never aborts the others.
pub async fn build_report(
    generator: &dyn TextGenerator,
    slots: [LoadOutcome; 3],
) -> Vec<DocumentReport> {
    let mut reports = Vec::with_capacity(3);

    for (kind, outcome) in DocumentKind::ALL.iter().zip(slots.iter()) {
        info!(kind = %kind, loaded = outcome.document().is_some(), "Summarizing document");
        let summary = summarize(generator, outcome, *kind).await;
        let panel_html = render_panel(&format!("{} Data", kind.label()), outcome);
        reports.push(DocumentReport {
            label: kind.label().to_string(),
            summary,
            panel_html,
        });
    }

    reports
}
