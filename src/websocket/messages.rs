//! WebSocket Message Types
//!
//! Defines the messages exchanged between the dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::dashboard::{DashboardView, SliderEvent};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One slider moved
    SetImportance {
        /// Task index
        task: usize,
        /// New importance level (1-5)
        value: u8,
    },
    /// Replace every slider value
    SetAll {
        /// One importance level per task
        values: Vec<u8>,
    },
    /// Restore the all-ones default
    Reset,
    /// Ping for keepalive
    Ping,
}

impl ClientMessage {
    /// Slider event carried by this message, if any
    pub fn into_event(self) -> Option<SliderEvent> {
        match self {
            ClientMessage::SetImportance { task, value } => Some(SliderEvent::Set { task, value }),
            ClientMessage::SetAll { values } => Some(SliderEvent::SetAll(values)),
            ClientMessage::Reset => Some(SliderEvent::Reset),
            ClientMessage::Ping => None,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session established, with the initial view
    Connected {
        /// Unique session identifier
        session_id: String,
        view: Box<DashboardView>,
    },
    /// Recomputed view after a slider event
    Update { view: Box<DashboardView> },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    pub fn update(view: DashboardView) -> Self {
        ServerMessage::Update {
            view: Box::new(view),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::derive;
    use crate::ratings::RatingStore;
    use crate::scoring::ImportanceVector;

    #[test]
    fn test_client_message_deserialize_set_importance() {
        let json = r#"{"type": "set_importance", "task": 3, "value": 4}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::SetImportance { task, value } => {
                assert_eq!(task, 3);
                assert_eq!(value, 4);
            }
            _ => panic!("Expected SetImportance"),
        }
    }

    #[test]
    fn test_client_message_deserialize_set_all() {
        let json = r#"{"type": "set_all", "values": [1, 2, 3]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.into_event(), Some(SliderEvent::SetAll(vec![1, 2, 3])));
    }

    #[test]
    fn test_client_message_deserialize_ping_and_reset() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
        assert_eq!(msg.into_event(), None);

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "reset"}"#).unwrap();
        assert_eq!(msg.into_event(), Some(SliderEvent::Reset));
    }

    #[test]
    fn test_client_message_rejects_negative_value() {
        let json = r#"{"type": "set_importance", "task": 0, "value": -1}"#;
        assert!(serde_json::from_str::<ClientMessage>(json).is_err());
    }

    #[test]
    fn test_server_message_serialize_update() {
        let store = RatingStore::fixture();
        let view = derive(&ImportanceVector::ones(10), &store);
        let json = serde_json::to_string(&ServerMessage::update(view)).unwrap();

        assert!(json.contains("\"type\":\"update\""));
        assert!(json.contains("\"importance\":[1,1,1,1,1,1,1,1,1,1]"));
        assert!(json.contains("\"kind\":\"bar\""));
        assert!(json.contains("\"kind\":\"radar\""));
    }

    #[test]
    fn test_server_message_serialize_error() {
        let json = serde_json::to_string(&ServerMessage::error("nope")).unwrap();
        assert_eq!(json, r#"{"type":"error","message":"nope"}"#);
    }
}
