//! Client for an OpenAI-compatible chat-completions API.

use crate::domain::gateways::LlmError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Connection settings for [`ChatClient`].
#[derive(Debug, Clone)]
pub struct ChatClientConfig {
    /// API root, e.g. `https://api.groq.com/openai/v1`.
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// A configured chat-completions client.
///
/// One instance is built at startup and shared (via `Arc`) by every gateway
/// that talks to the language model, so all calls use the same endpoint,
/// credentials and model.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ChatClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        let endpoint = format!(
            "{}/chat/completions",
            config.api_base.trim_end_matches('/')
        );
        info!(endpoint = %endpoint, model = %config.model, "LLM client configured");

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
            model: config.model,
        })
    }

    /// Model used for completions.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a system instruction plus user text and returns the trimmed reply.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] on transport failure, non-success status, an
    /// undecodable body or a response without completion text.
    pub async fn complete(&self, instruction: &str, text: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(LlmError::EmptyCompletion)?;

        debug!(chars = content.len(), "LLM completion received");
        Ok(content)
    }
}
