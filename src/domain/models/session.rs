#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

/// In-memory record of the video being discussed. Lives exactly as long as the
/// chat window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub video_id: Option<String>,
    pub initialized: bool,
}

impl Session {
    pub fn new(video_id: Option<String>) -> Session {
        return Session {
            video_id,
            initialized: false,
        };
    }

    /// The video ID, only when it is non-empty after trimming.
    pub fn video_id(&self) -> Option<&str> {
        return self
            .video_id
            .as_deref()
            .filter(|video_id| return !video_id.trim().is_empty());
    }

    /// Questions may only be sent for an initialized session with a video.
    pub fn can_chat(&self) -> bool {
        return self.initialized && self.video_id().is_some();
    }
}
