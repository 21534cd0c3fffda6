use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatPrompt {
    pub video_id: String,
    pub question: String,
}

impl ChatPrompt {
    pub fn new(video_id: &str, question: &str) -> ChatPrompt {
        return ChatPrompt {
            video_id: video_id.to_string(),
            question: question.to_string(),
        };
    }
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the backend is reachable before anything else
    /// is requested from it.
    async fn health_check(&self) -> Result<()>;

    /// Asks the backend to prepare a video's transcript for questions. Safe to
    /// call repeatedly for the same video.
    async fn initialize(&self, video_id: &str) -> Result<()>;

    /// Sends a single question about an initialized video and returns the
    /// answer text. Errors carry a message fit to show the user.
    async fn chat(&self, prompt: ChatPrompt) -> Result<String>;
}

pub type BackendArc = Arc<dyn Backend + Send + Sync>;
