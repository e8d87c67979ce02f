//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! or CLI starts.
//!
//! ## Example
//!
//! ```bash
//! export LLM_API_KEY="gsk_..."
//! export LLM_API_BASE="https://api.groq.com/openai/v1"
//! export LLM_MODEL="mixtral-8x7b-32768"
//! export SOURCE_BASE_URL="https://www.drugs.com"
//! ```
//!
//! ## Required Variables
//!
//! - `LLM_API_KEY` (or `GROQ_API_KEY`) - Bearer key for the chat-completions API
//!
//! ## Optional Variables
//!
//! - `SOURCE_BASE_URL` - Drug database root (default: `https://www.drugs.com`)
//! - `LLM_API_BASE` - OpenAI-compatible API root (default: Groq)
//! - `LLM_MODEL` - Chat model (default: `mixtral-8x7b-32768`)
//! - `FETCH_TIMEOUT_SECS` - Page fetch timeout (default: 5)
//! - `LLM_TIMEOUT_SECS` - LLM call timeout (default: 60)
//! - `CLASSIFY_CONCURRENCY` - Parallel review classifications (default: 4, max: 64)
//! - `FETCH_RETRIES` - Extra attempts for transient fetch failures (default: 0, max: 5)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from proxy headers (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::llm::ChatClientConfig;

const DEFAULT_SOURCE_BASE_URL: &str = "https://www.drugs.com";
const DEFAULT_LLM_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_LLM_MODEL: &str = "mixtral-8x7b-32768";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_base_url: String,
    pub llm_api_base: String,
    /// Bearer key for the LLM API. Never logged.
    pub llm_api_key: String,
    pub llm_model: String,
    pub fetch_timeout_secs: u64,
    pub llm_timeout_secs: u64,
    /// Maximum number of reviews classified concurrently within one run.
    pub classify_concurrency: usize,
    /// Extra attempts for transient page fetch failures. Zero means one attempt.
    pub fetch_retries: usize,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no LLM API key is configured.
    pub fn from_env() -> Result<Self> {
        let llm_api_key = Self::load_api_key().context("Failed to load LLM configuration")?;

        let source_base_url =
            env::var("SOURCE_BASE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_BASE_URL.to_string());
        let llm_api_base =
            env::var("LLM_API_BASE").unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string());
        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());

        let fetch_timeout_secs = parse_or("FETCH_TIMEOUT_SECS", 5);
        let llm_timeout_secs = parse_or("LLM_TIMEOUT_SECS", 60);
        let classify_concurrency = parse_or("CLASSIFY_CONCURRENCY", 4);
        let fetch_retries = parse_or("FETCH_RETRIES", 0);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            source_base_url,
            llm_api_base,
            llm_api_key,
            llm_model,
            fetch_timeout_secs,
            llm_timeout_secs,
            classify_concurrency,
            fetch_retries,
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
        })
    }

    /// Loads the LLM API key.
    ///
    /// Priority:
    /// 1. `LLM_API_KEY` environment variable
    /// 2. `GROQ_API_KEY` environment variable
    fn load_api_key() -> Result<String> {
        if let Ok(key) = env::var("LLM_API_KEY") {
            return Ok(key);
        }

        env::var("GROQ_API_KEY").context("LLM_API_KEY (or GROQ_API_KEY) must be set")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a base URL is not HTTP(S)
    /// - the API key is empty
    /// - a timeout is zero
    /// - `classify_concurrency` is outside 1..=64
    /// - `fetch_retries` is above 5
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("SOURCE_BASE_URL", &self.source_base_url),
            ("LLM_API_BASE", &self.llm_api_base),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
            }
        }

        if self.llm_api_key.trim().is_empty() {
            anyhow::bail!("LLM_API_KEY must not be empty");
        }

        if self.llm_model.trim().is_empty() {
            anyhow::bail!("LLM_MODEL must not be empty");
        }

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }

        if self.llm_timeout_secs == 0 {
            anyhow::bail!("LLM_TIMEOUT_SECS must be greater than 0");
        }

        if self.classify_concurrency == 0 || self.classify_concurrency > 64 {
            anyhow::bail!(
                "CLASSIFY_CONCURRENCY must be between 1 and 64, got {}",
                self.classify_concurrency
            );
        }

        if self.fetch_retries > 5 {
            anyhow::bail!("FETCH_RETRIES must be at most 5, got {}", self.fetch_retries);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Settings for the shared chat-completions client.
    pub fn chat_client_config(&self) -> ChatClientConfig {
        ChatClientConfig {
            api_base: self.llm_api_base.clone(),
            api_key: self.llm_api_key.clone(),
            model: self.llm_model.clone(),
            timeout: Duration::from_secs(self.llm_timeout_secs),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Source site: {}", self.source_base_url);
        tracing::info!("  LLM API: {} (model {})", self.llm_api_base, self.llm_model);
        tracing::info!("  LLM API key: {}", mask_secret(&self.llm_api_key));
        tracing::info!(
            "  Timeouts: fetch {}s, LLM {}s",
            self.fetch_timeout_secs,
            self.llm_timeout_secs
        );
        tracing::info!("  Classification concurrency: {}", self.classify_concurrency);
        tracing::info!("  Fetch retries: {}", self.fetch_retries);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `gsk_abcdef123` → `gsk_***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let visible: String = secret.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
