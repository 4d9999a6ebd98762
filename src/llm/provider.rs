use async_trait::async_trait;

use crate::types::AppResult;

/// Seam over the remote generative-text service: one prompt in, one
/// completion out. Implemented by `GeminiClient` in production and by stubs
/// in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}
