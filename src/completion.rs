//! Client for the external chat-completion API.
//!
//! The service talks to any OpenAI-compatible `/chat/completions` endpoint. The
//! [`CompletionClient`] trait is the seam the chat service depends on, so the
//! HTTP transport can be swapped out in tests.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CompletionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion API key is not configured")]
    MissingApiKey,

    #[error("request to completion service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the conversation and return the assistant's reply text.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, CompletionError>;
}

/// Reqwest-backed client for an OpenAI-compatible completion endpoint.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &CompletionConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("tayib-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature,
        };
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(CompletionError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        parse_reply(&body)
    }
}

fn parse_reply(body: &[u8]) -> Result<String, CompletionError> {
    let parsed: CompletionResponse =
        serde_json::from_slice(body).map_err(|err| CompletionError::Malformed(err.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::Malformed("response carries no reply".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":"Try Barbar."}},{"message":{"content":"ignored"}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "Try Barbar.");
    }

    #[test]
    fn empty_choices_are_malformed() {
        let err = parse_reply(br#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_reply(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn messages_serialize_with_lowercase_roles() {
        let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "system", "content": "be brief" }));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = OpenAiClient::new(&CompletionConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".into(),
            model: "gpt-3.5-turbo".into(),
        })
        .unwrap();
        let err = client
            .complete(&[ChatMessage::user("hi")], 0.7)
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
    }
}
