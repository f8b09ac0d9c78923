use serde::Deserialize;

pub mod http;

pub use http::{HttpHostClient, DEFAULT_HOST_URL, HOST_URL_ENV};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host api request failed: {0}")]
    Api(String),
    #[error("invalid host payload: {0}")]
    Payload(String),
}

/// Inbound signals as the host hook delivers them on stdin.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HostEvent {
    #[serde(rename = "session.idle", rename_all = "camelCase")]
    SessionIdle { session_id: String },
    #[serde(rename = "session.created", rename_all = "camelCase")]
    SessionCreated { session_id: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionTurn {
    pub role: TurnRole,
    #[serde(default)]
    pub parts: Vec<TurnPart>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Assistant,
    #[serde(other)]
    Other,
}

/// Content parts of a turn; anything that is not plain text is carried as
/// `Other` and ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnPart {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// All text parts of the last assistant turn, trimmed and joined.
pub fn last_assistant_text(turns: &[SessionTurn]) -> Option<String> {
    let turn = turns
        .iter()
        .rev()
        .find(|turn| turn.role == TurnRole::Assistant)?;
    let mut lines = Vec::new();
    for part in &turn.parts {
        if let TurnPart::Text { text } = part {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
    }
    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}

pub trait SessionQuery {
    fn session_turns(&self, session_id: &str) -> Result<Vec<SessionTurn>, HostError>;
}

/// The host control surface. Each call depends on the previous call's side
/// effect; the driver issues them strictly in order.
pub trait SessionControl {
    fn create_session(&self) -> Result<(), HostError>;
    fn append_prompt(&self, text: &str) -> Result<(), HostError>;
    fn submit_prompt(&self) -> Result<(), HostError>;
}
