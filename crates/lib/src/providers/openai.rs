use super::{ChatCompletion, ChatProvider};
use crate::errors::Txt2SqlError;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 4096;

// --- Provider implementation ---

/// A provider for OpenAI-compatible chat-completion APIs (DeepSeek, OpenAI,
/// local inference servers).
#[derive(Clone, Debug)]
pub struct OpenAiCompatProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatProvider {
    /// Creates a new `OpenAiCompatProvider`.
    ///
    /// `api_url` must be the full chat-completions endpoint URL.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, Txt2SqlError> {
        let client = ReqwestClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Txt2SqlError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatProvider {
    /// Performs a single chat-completion exchange.
    ///
    /// One POST, one response. No retries, no streaming.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ChatCompletion, Txt2SqlError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        info!("start HTTP request to {}", self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(Txt2SqlError::ApiRequest)?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(Txt2SqlError::ApiResponseRead)?;

        debug!(%status, body = %raw, "chat API response");

        if !status.is_success() {
            return Err(Txt2SqlError::ApiStatus { status, body: raw });
        }

        let parsed: ChatResponse = serde_json::from_str(&raw)?;
        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or(Txt2SqlError::EmptyChoices)?;

        Ok(ChatCompletion { content, raw })
    }
}
