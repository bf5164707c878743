// src/services/gateway.rs
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prompt::PromptMessage;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const MODEL: &str = "google/gemini-2.5-flash";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 300;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to continue.")]
    PaymentRequired,

    #[error("AI gateway error: status {status}")]
    Upstream { status: StatusCode, body: String },

    #[error("AI gateway returned no completion")]
    EmptyCompletion,

    /// The source error names the upstream URL, so it is logged rather than displayed.
    #[error("AI gateway request failed")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the hosted chat-completion endpoint.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the conversation and returns the first choice's text. Never retries.
    pub async fn complete(&self, messages: &[PromptMessage]) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                GatewayError::RateLimited
            } else if status == StatusCode::PAYMENT_REQUIRED {
                GatewayError::PaymentRequired
            } else {
                GatewayError::Upstream {
                    status,
                    body: response.text().await.unwrap_or_default(),
                }
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GatewayError::EmptyCompletion)
    }
}
