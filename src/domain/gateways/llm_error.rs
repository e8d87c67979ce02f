//! Errors returned by language-model backed gateways.

/// Failure of a call to the language-model service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Request(String),

    #[error("LLM service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("LLM response could not be decoded: {0}")]
    InvalidResponse(String),

    #[error("LLM response contained no completion")]
    EmptyCompletion,
}
