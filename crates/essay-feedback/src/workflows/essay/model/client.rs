use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LanguageModel, ModelError, ModelRequest};
use crate::config::ModelConfig;

/// Chat-completions client authenticated with a bearer key.
#[derive(Clone)]
pub struct OpenAiChatModel {
    endpoint: String,
    api_key: String,
    model: String,
    http: Client,
}

impl OpenAiChatModel {
    pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
        let api_key = config.api_key.clone().ok_or(ModelError::NotConfigured)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ModelError::Unavailable(format!("http client setup failed: {err}")))?;

        Ok(Self {
            endpoint: chat_endpoint(&config.base_url),
            api_key,
            model: config.model.clone(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn chat_endpoint(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/chat/completions") {
        base.to_string()
    } else {
        format!("{base}/chat/completions")
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl LanguageModel for OpenAiChatModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &ModelRequest) -> Result<String, ModelError> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
        };

        let started = std::time::Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ModelError::Unavailable(err.to_string()))?
            .error_for_status()
            .map_err(|err| ModelError::Unavailable(err.to_string()))?;

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ModelError::Format(format!("completion envelope: {err}")))?;

        tracing::debug!(
            call = request.call.label(),
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "chat completion received"
        );

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ModelError::Format("completion contained no message content".to_string()))
    }
}
