// Google Gemini adapter
// API Reference: https://ai.google.dev/api/generate-content

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LLMConfig;
use crate::llm::provider::TextGenerator;
use crate::types::{AppError, AppResult};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    base_url: String,
}

// Request types for the generateContent endpoint
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

// Response types
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
    #[serde(rename = "finishReason")]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(config: &LLMConfig, base_url: impl Into<String>) -> Self {
        let mut client = Self::new(config);
        client.base_url = base_url.into();
        client
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt.to_string() }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LLMApi(format!("Gemini request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a structured Gemini error body
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_text) {
                return Err(AppError::LLMApi(format!(
                    "Gemini API error ({}): {} (status: {:?})",
                    status, error_response.error.message, error_response.error.status
                )));
            }

            return Err(AppError::LLMApi(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLMApi(format!("Failed to parse Gemini response: {}", e)))?;

        let candidate = body
            .candidates
            .first()
            .ok_or_else(|| AppError::LLMApi("Gemini returned no candidates".to_string()))?;

        let part = candidate
            .content
            .parts
            .first()
            .ok_or_else(|| AppError::LLMApi("Gemini candidate has no parts".to_string()))?;

        Ok(part.text.clone())
    }
}

/// Available Gemini models (https://ai.google.dev/gemini-api/docs/models)
pub mod models {
    /// Fast, low-cost default for document analysis
    pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";
    /// Higher-quality model for long or complex documents
    pub const GEMINI_1_5_PRO: &str = "gemini-1.5-pro";

    pub const DEFAULT: &str = GEMINI_1_5_FLASH;
}
