//! Session Hub
//!
//! Tracks live dashboard sessions and the channel used to reach each one.
//! Sessions never share state; the hub only enforces the session limit and
//! reports counts for health checks.

use std::collections::HashMap;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::messages::ServerMessage;

/// Unique identifier for a dashboard session
pub type SessionId = String;

/// Registry of live sessions
pub struct SessionHub {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
    config: HubConfig,
}

/// Configuration for the session hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self { max_sessions: 64 }
    }
}

/// Handle for sending messages to a specific session
pub struct SessionHandle {
    /// Channel sender for this session's socket
    pub sender: mpsc::UnboundedSender<ServerMessage>,
    /// When the session connected
    pub opened_at: Instant,
}

impl SessionHub {
    /// Create a new session hub
    pub fn new(config: HubConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Register a new session
    ///
    /// Returns the session ID on success, or an error if the session limit
    /// has been reached.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<SessionId, HubError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(HubError::TooManySessions(self.config.max_sessions));
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(
            id.clone(),
            SessionHandle {
                sender,
                opened_at: Instant::now(),
            },
        );

        tracing::info!(session_id = %id, active = sessions.len(), "Dashboard session opened");
        Ok(id)
    }

    /// Remove a session
    pub async fn unregister(&self, id: &str) {
        let handle = self.sessions.write().await.remove(id);

        if let Some(handle) = handle {
            tracing::info!(
                session_id = %id,
                duration_secs = handle.opened_at.elapsed().as_secs(),
                "Dashboard session closed"
            );
        }
    }

    /// Send a message directly to a session
    pub async fn send_to(&self, id: &str, message: ServerMessage) -> Result<(), HubError> {
        let sessions = self.sessions.read().await;
        let handle = sessions.get(id).ok_or(HubError::SessionNotFound)?;

        handle.sender.send(message).map_err(|_| HubError::SendFailed)
    }

    /// Get the current session count
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Configured session limit
    pub fn max_sessions(&self) -> usize {
        self.config.max_sessions
    }
}

/// Errors that can occur in the session hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many sessions (limit: {0})")]
    TooManySessions(usize),

    #[error("Session not found")]
    SessionNotFound,

    #[error("Failed to send message")]
    SendFailed,
}
