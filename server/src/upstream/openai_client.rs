//! OpenAI Client
//!
//! `ChatClient` implementation for the OpenAI chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::ChatClient;
use crate::config::UpstreamConfig;
use crate::domain::RecipeError;

/// Default OpenAI API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default OpenAI model
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    n: u8,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// OpenAI API client
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
    completions_url: String,
}

impl OpenAiClient {
    /// Create a client. `api_key` may be empty; the API then answers 401.
    pub fn new(
        api_key: String,
        model: String,
        api_base: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_key,
            client: builder.build()?,
            model,
            completions_url: format!("{}/chat/completions", api_base.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            &config.api_base,
            config.timeout,
        )
    }

    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, RecipeError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_prompt },
            ],
            n: 1,
        };

        let response = self
            .client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RecipeError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RecipeError::Transport(e.to_string()))?;
        debug!(%status, bytes = text.len(), "Chat API responded");

        if !status.is_success() {
            return Err(RecipeError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| RecipeError::MalformedResponse(e.to_string()))?;
        let choice = parsed.choices.into_iter().next().ok_or(RecipeError::NoChoices)?;
        choice
            .message
            .content
            .ok_or_else(|| RecipeError::MalformedResponse("first choice has no message content".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
