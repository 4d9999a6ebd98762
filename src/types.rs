// Type definitions and enums

/// The three document categories the analyzer understands. Every prompt sent
/// to the LLM is tagged with exactly one of these labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DocumentKind {
    BalanceSheet,
    ProfitAndLoss,
    CashFlow,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::BalanceSheet,
        DocumentKind::ProfitAndLoss,
        DocumentKind::CashFlow,
    ];

    /// Label used in prompts and summary panels.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::BalanceSheet => "Balance Sheet",
            DocumentKind::ProfitAndLoss => "Profit and Loss",
            DocumentKind::CashFlow => "Cash Flow",
        }
    }

    /// Multipart field name for this slot in the upload form.
    pub fn field_name(&self) -> &'static str {
        match self {
            DocumentKind::BalanceSheet => "balance_sheet",
            DocumentKind::ProfitAndLoss => "profit_loss",
            DocumentKind::CashFlow => "cash_flow",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.field_name() == name)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
