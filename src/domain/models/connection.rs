#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

/// Startup progress of a chat window. Every window walks through these once,
/// reopening starts again from `Disconnected`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Unreachable,
    NoVideo,
    Initializing,
    Ready,
    InitFailed,
}

impl ConnectionState {
    pub fn can_transition(&self, next: ConnectionState) -> bool {
        match (self, next) {
            (ConnectionState::Disconnected, ConnectionState::Connecting) => return true,
            (ConnectionState::Connecting, ConnectionState::Unreachable) => return true,
            (ConnectionState::Connecting, ConnectionState::NoVideo) => return true,
            (ConnectionState::Connecting, ConnectionState::Initializing) => return true,
            (ConnectionState::Initializing, ConnectionState::Ready) => return true,
            (ConnectionState::Initializing, ConnectionState::InitFailed) => return true,
            _ => return false,
        }
    }

    pub fn transition(&self, next: ConnectionState) -> Result<ConnectionState> {
        if !self.can_transition(next) {
            bail!(format!("Invalid connection transition from {self} to {next}"));
        }

        return Ok(next);
    }
}
