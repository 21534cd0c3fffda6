#[cfg(test)]
#[path = "transcript_api_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::ChatPrompt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct InitializeRequest {
    video_id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct InitializeResponse {
    success: Option<bool>,
    message: Option<String>,
    video_id: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    video_id: String,
    question: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatResponse {
    response: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Pulls the backend's `error` field out of a failed response, falling back
/// to `fallback` when the body is missing, not JSON, or has no message.
async fn error_message(res: reqwest::Response, fallback: &str) -> String {
    let status = res.status().as_u16();
    let body = res.json::<ErrorResponse>().await;
    tracing::error!(status = status, body = ?body, "{fallback}");

    if let Ok(ErrorResponse { error: Some(err) }) = body {
        if !err.trim().is_empty() {
            return err;
        }
    }

    return fallback.to_string();
}

pub struct TranscriptApi {
    url: String,
}

impl Default for TranscriptApi {
    fn default() -> TranscriptApi {
        return TranscriptApi {
            url: Config::get(ConfigKey::ApiURL),
        };
    }
}

impl TranscriptApi {
    fn endpoint(&self, path: &str) -> String {
        return format!("{url}/{path}", url = self.url.trim_end_matches('/'));
    }
}

#[async_trait]
impl Backend for TranscriptApi {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(self.endpoint("health"))
            .send()
            .await;

        if let Err(err) = res {
            tracing::error!(error = ?err, "Backend is not running");
            bail!("Backend server is not running");
        }

        let status = res?.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Backend health check failed");
            bail!("Backend server is not running");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn initialize(&self, video_id: &str) -> Result<()> {
        let req = InitializeRequest {
            video_id: video_id.to_string(),
        };

        let res = reqwest::Client::new()
            .post(self.endpoint("initialize"))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            bail!(error_message(res, "Failed to initialize video").await);
        }

        let body = res.json::<InitializeResponse>().await;
        tracing::debug!(body = ?body, "Initialize response");

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn chat(&self, prompt: ChatPrompt) -> Result<String> {
        let req = ChatRequest {
            video_id: prompt.video_id,
            question: prompt.question,
        };

        let res = reqwest::Client::new()
            .post(self.endpoint("chat"))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            bail!(error_message(res, "Failed to get response").await);
        }

        let body = res.json::<ChatResponse>().await?;
        tracing::debug!(body = ?body, "Chat response");

        if let Some(text) = body.response {
            return Ok(text);
        }

        bail!("Failed to get response");
    }
}
