//! Live producer backed by an OpenAI-compatible chat-completion API.
//!
//! One request per submission: no retry, no streaming, no backoff. Any failure is returned as a
//! [`GuideError`] and shown to the user as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ResponseProducer;
use crate::config::{CompletionConfig, ProducerMode};
use crate::patient::PatientInput;
use crate::prompt::{user_context, SYSTEM_INSTRUCTION};
use crate::{GuideError, GuideResult};

/// Request body for `POST /chat/completions`.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response body from `POST /chat/completions`; only the fields read are modelled.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for the remote completion service.
pub struct CompletionProducer {
    client: reqwest::Client,
    cfg: CompletionConfig,
}

impl CompletionProducer {
    /// Create a producer for the service described by `cfg`.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::HttpClientBuild` if the TLS backend cannot be initialised.
    pub fn new(cfg: CompletionConfig) -> GuideResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GuideError::HttpClientBuild)?;
        Ok(Self { client, cfg })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.cfg.api_base())
    }

    fn map_send_error(&self, e: reqwest::Error) -> GuideError {
        if e.is_timeout() {
            GuideError::CompletionTimeout(self.cfg.timeout().map(|t| t.as_secs()).unwrap_or(0))
        } else if e.is_connect() {
            GuideError::CompletionConnection(self.cfg.api_base().to_string())
        } else {
            GuideError::CompletionTransport(e)
        }
    }

    /// Send one completion request and return the trimmed text of the first choice.
    pub async fn complete(&self, system: &str, user: &str) -> GuideResult<String> {
        let body = ChatRequest {
            model: self.cfg.model(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.cfg.temperature(),
        };

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = self.cfg.api_key() {
            request = request.bearer_auth(key);
        }

        tracing::debug!(model = self.cfg.model(), "sending completion request");
        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "completion response received");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GuideError::CompletionStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(GuideError::CompletionDecode)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GuideError::EmptyCompletion)
    }
}

#[async_trait]
impl ResponseProducer for CompletionProducer {
    fn mode(&self) -> ProducerMode {
        ProducerMode::Live
    }

    async fn produce(&self, input: &PatientInput) -> GuideResult<String> {
        self.complete(SYSTEM_INSTRUCTION, &user_context(input))
            .await
    }
}
