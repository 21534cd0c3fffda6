#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::BackendArc;
use crate::domain::models::ConnectionState;
use crate::domain::models::Event;
use crate::domain::models::Status;
use crate::domain::models::VideoUrl;

fn send_state(
    tx: &mpsc::UnboundedSender<Event>,
    state: ConnectionState,
    status: Status,
) -> Result<()> {
    tracing::debug!(state = %state, status = status.text.as_str(), "Connection state");
    tx.send(Event::ConnectionChanged(state, status))?;
    return Ok(());
}

/// Runs the startup sequence of a chat window: health check, video
/// resolution, then initialization. Each step is attempted once.
pub struct Lifecycle {}

impl Lifecycle {
    pub async fn start(
        backend: &BackendArc,
        page_url: &str,
        api_url: &str,
        tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<ConnectionState> {
        send_state(
            tx,
            ConnectionState::Connecting,
            Status::loading("Connecting to backend..."),
        )?;

        if let Err(err) = backend.health_check().await {
            send_state(
                tx,
                ConnectionState::Unreachable,
                Status::error(&format!(
                    "Error: {err}. Make sure the backend is running at {api_url}."
                )),
            )?;
            return Ok(ConnectionState::Unreachable);
        }

        let video_id = match VideoUrl::resolve(page_url) {
            Some(video_id) => video_id,
            None => {
                tracing::debug!(page_url = page_url, "Not a video page");
                send_state(
                    tx,
                    ConnectionState::NoVideo,
                    Status::error("Please open a YouTube video by passing its watch URL."),
                )?;
                return Ok(ConnectionState::NoVideo);
            }
        };

        tx.send(Event::VideoResolved(video_id.to_string()))?;
        send_state(
            tx,
            ConnectionState::Initializing,
            Status::loading("Loading video transcript..."),
        )?;

        if let Err(err) = backend.initialize(&video_id).await {
            send_state(
                tx,
                ConnectionState::InitFailed,
                Status::error(&format!("Error: {err}")),
            )?;
            return Ok(ConnectionState::InitFailed);
        }

        send_state(
            tx,
            ConnectionState::Ready,
            Status::success("Ready to chat!"),
        )?;

        return Ok(ConnectionState::Ready);
    }
}
