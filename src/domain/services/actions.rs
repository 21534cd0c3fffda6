#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Lifecycle;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendArc;
use crate::domain::models::ChatPrompt;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit vidchat.

HOTKEYS:
- Enter - Send your question about the video.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit vidchat.

The question box stays locked until the video's transcript is ready, and while an answer is on its way.
        "#;

    return text.trim().to_string();
}

/// Asks the backend a question and always reports back with exactly one
/// `ChatReply`, carrying either the answer or the error.
async fn chat_reply(
    backend: BackendArc,
    prompt: ChatPrompt,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let reply = match backend.chat(prompt).await {
        Ok(text) => Message::new(Author::Bot, &text),
        Err(err) => {
            tracing::error!(error = ?err, "Chat request failed");
            Message::new_with_type(Author::Bot, MessageType::Error, &format!("Error: {err}"))
        }
    };

    tx.send(Event::ChatReply(reply))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendArc,
        page_url: &str,
        api_url: &str,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        Lifecycle::start(&backend, page_url, api_url, &tx).await?;

        while let Some(action) = rx.recv().await {
            match action {
                Action::ChatRequest(prompt) => {
                    let worker_backend = backend.clone();
                    let worker_tx = tx.clone();
                    tokio::spawn(async move {
                        return chat_reply(worker_backend, prompt, &worker_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
