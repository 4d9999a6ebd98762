use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl ServerConfig {
    /// The socket address the server binds to, from `HOST` and `PORT`.
    pub fn bind_addr(&self) -> std::result::Result<std::net::SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            llm: LLMConfig {
                // The one hard startup requirement: refuse to serve without a key.
                gemini_api_key: env::var("GEMINI_API_KEY")
                    .context("GEMINI_API_KEY must be set")?,
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| crate::llm::gemini::models::DEFAULT.to_string()),
                temperature: env::var("LLM_TEMPERATURE")
                    .unwrap_or_else(|_| "0.2".to_string())
                    .parse()?,
                max_output_tokens: env::var("LLM_MAX_OUTPUT_TOKENS")
                    .unwrap_or_else(|_| "1024".to_string())
                    .parse()?,
            },
        })
    }
}
