use crate::host::{HostError, SessionControl, SessionQuery, SessionTurn};
use serde_json::{json, Value};

pub const DEFAULT_HOST_URL: &str = "http://127.0.0.1:4096";
pub const HOST_URL_ENV: &str = "AUTOCHAIN_HOST_URL";

/// Blocking client for the host's local control port.
pub struct HttpHostClient {
    base_url: String,
}

impl HttpHostClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let configured = std::env::var(HOST_URL_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self::new(configured.unwrap_or_else(|| DEFAULT_HOST_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post(&self, path: &str, body: Option<Value>) -> Result<(), HostError> {
        let request = ureq::post(&self.endpoint(path));
        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };
        result.map_err(|e| HostError::Api(e.to_string()))?;
        Ok(())
    }
}

impl SessionQuery for HttpHostClient {
    fn session_turns(&self, session_id: &str) -> Result<Vec<SessionTurn>, HostError> {
        let url = self.endpoint(&format!("/session/{session_id}/message"));
        let response = ureq::get(&url)
            .call()
            .map_err(|e| HostError::Api(e.to_string()))?;
        response
            .into_json::<Vec<SessionTurn>>()
            .map_err(|e| HostError::Payload(e.to_string()))
    }
}

impl SessionControl for HttpHostClient {
    fn create_session(&self) -> Result<(), HostError> {
        self.post("/session", None)
    }

    fn append_prompt(&self, text: &str) -> Result<(), HostError> {
        self.post("/tui/append-prompt", Some(json!({ "text": text })))
    }

    fn submit_prompt(&self) -> Result<(), HostError> {
        self.post("/tui/submit-prompt", None)
    }
}
