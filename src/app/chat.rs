//! HTTP client for the showroom chat collaborator
//!
//! The chat endpoint is a thread-oriented JSON API: a POST to `/start`
//! opens a thread, `/message` exchanges one user message for one reply,
//! and `/history/{thread}` returns the transcript so far. Every response
//! wraps its payload in a `data` envelope; an envelope without the
//! expected payload is reported as a malformed response rather than a
//! transport failure.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::constants::{chat, http};
use crate::errors::{ChatError, ChatResult};

/// Connection settings for a [`ChatClient`]
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base endpoint, e.g. `http://localhost:3000/api/chat`
    pub base_url: String,
    /// Overall request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: chat::DEFAULT_BASE_URL.to_string(),
            timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
        }
    }
}

/// One entry in a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
}

/// Response envelope shared by every chat endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartPayload {
    thread_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryPayload {
    history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutgoingMessage<'a> {
    thread_id: &'a str,
    message: &'a str,
}

/// Client for the chat collaborator endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ChatClient {
    /// Build a client for the configured endpoint
    ///
    /// Validates the base URL up front so a typo fails here instead of
    /// on the first message.
    pub fn new(config: &ChatConfig) -> ChatResult<Self> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|source| ChatError::InvalidEndpoint {
            url: config.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .user_agent(http::USER_AGENT)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The validated base endpoint this client talks to
    pub fn endpoint(&self) -> &Url {
        &self.base_url
    }

    /// Open a new chat thread and return its identifier
    pub async fn start_chat(&self) -> ChatResult<String> {
        let url = format!("{}/start", self.base_url.as_str().trim_end_matches('/'));
        debug!("Starting chat thread at {}", url);

        let envelope: Envelope<StartPayload> = self.http.post(url).send().await?.json().await?;
        envelope
            .data
            .and_then(|payload| payload.thread_id)
            .ok_or(ChatError::MalformedResponse {
                operation: "start chat",
            })
    }

    /// Send one user message on a thread and return the reply text
    pub async fn send_message(&self, thread_id: &str, message: &str) -> ChatResult<String> {
        if thread_id.is_empty() {
            return Err(ChatError::MissingThread);
        }

        let url = format!("{}/message", self.base_url.as_str().trim_end_matches('/'));
        debug!("Sending chat message to thread {}", thread_id);

        let body = OutgoingMessage { thread_id, message };
        let envelope: Envelope<MessagePayload> = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        envelope
            .data
            .and_then(|payload| payload.response)
            .ok_or(ChatError::MalformedResponse {
                operation: "send message",
            })
    }

    /// Fetch the transcript of an existing thread
    pub async fn history(&self, thread_id: &str) -> ChatResult<Vec<ChatMessage>> {
        if thread_id.is_empty() {
            return Err(ChatError::MissingThread);
        }

        let url = format!(
            "{}/history/{}",
            self.base_url.as_str().trim_end_matches('/'),
            thread_id
        );
        debug!("Fetching chat history for thread {}", thread_id);

        let envelope: Envelope<HistoryPayload> = self.http.get(url).send().await?.json().await?;
        envelope
            .data
            .and_then(|payload| payload.history)
            .ok_or(ChatError::MalformedResponse {
                operation: "get chat history",
            })
    }
}
