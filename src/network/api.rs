use reqwest::{Client, Response, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::common::{ConversationSentiment, Sentiment};

use super::error::ApiError;

pub const SEND_MESSAGE_PATH: &str = "/api/send_message";
pub const END_CONVERSATION_PATH: &str = "/api/end_conversation";
pub const RESET_PATH: &str = "/api/reset";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    reply: String,
    #[serde(default)]
    user_sentiment: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EndConversationResponse {
    conversation_sentiment: ConversationSentiment,
}

/// Bot answer to one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub reply: String,
    pub sentiment: Sentiment,
}

/// Thin client for the three sentiment backend endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /api/send_message`. A missing or malformed `user_sentiment`
    /// is reported as neutral rather than as an error.
    pub async fn send_message(&self, text: &str) -> Result<Reply, ApiError> {
        let url = self.endpoint(SEND_MESSAGE_PATH);
        log::debug!("POST {url} ({} chars)", text.chars().count());

        let response = self
            .http
            .post(&url)
            .json(&SendMessageRequest { message: text })
            .send()
            .await?;

        let body: SendMessageResponse = read_json(response).await?;
        Ok(Reply {
            sentiment: Sentiment::from_value(body.user_sentiment.as_ref()),
            reply: body.reply,
        })
    }

    /// `POST /api/end_conversation`.
    pub async fn end_conversation(&self) -> Result<ConversationSentiment, ApiError> {
        let url = self.endpoint(END_CONVERSATION_PATH);
        log::debug!("POST {url}");

        let response = self.http.post(&url).send().await?;
        let body: EndConversationResponse = read_json(response).await?;
        Ok(body.conversation_sentiment)
    }

    /// `POST /api/reset`. Only the status is checked; the body is ignored.
    pub async fn reset(&self) -> Result<(), ApiError> {
        let url = self.endpoint(RESET_PATH);
        log::debug!("POST {url}");

        let response = self.http.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(())
    }
}

/// Checks status and content-type before decoding the body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    if !content_type.contains("application/json") {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::UnexpectedContentType { content_type, body });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
