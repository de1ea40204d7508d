//! Delegated analysis through an OpenAI-compatible chat-completions endpoint.
//!
//! Three independent calls (elements, linguistic metrics, holistic scoring) each return
//! free text expected to contain one JSON object. Responses are treated as untrusted and
//! parsed into the strict domain schema; any failure is reported as a [`ModelError`] so the
//! service can substitute the heuristic result.

mod client;
mod extract;
mod prompts;
mod schema;

pub use client::OpenAiChatModel;
pub use extract::extract_json_object;
pub use prompts::PromptBuilder;
pub use schema::{parse_elements, parse_holistic, parse_linguistic, HolisticAssessment};

use async_trait::async_trait;

use super::domain::FallbackReason;

/// The three independent analyses requested per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCall {
    Elements,
    Linguistic,
    Holistic,
}

impl ModelCall {
    pub fn temperature(&self) -> f32 {
        match self {
            ModelCall::Elements => 0.3,
            ModelCall::Linguistic => 0.1,
            ModelCall::Holistic => 0.2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelCall::Elements => "elements",
            ModelCall::Linguistic => "linguistic",
            ModelCall::Holistic => "holistic",
        }
    }
}

/// A rendered prompt ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub call: ModelCall,
    pub prompt: String,
    pub temperature: f32,
}

impl ModelRequest {
    pub fn new(call: ModelCall, prompt: String) -> Self {
        Self {
            call,
            prompt,
            temperature: call.temperature(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("no language model credential configured")]
    NotConfigured,
    #[error("language model unavailable: {0}")]
    Unavailable(String),
    #[error("language model response unreadable: {0}")]
    Format(String),
}

impl ModelError {
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            ModelError::NotConfigured => FallbackReason::NotConfigured,
            ModelError::Unavailable(_) => FallbackReason::UpstreamUnavailable,
            ModelError::Format(_) => FallbackReason::UpstreamFormat,
        }
    }
}

/// Text-completion seam so the service can be exercised without network access.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, request: &ModelRequest) -> Result<String, ModelError>;
}
