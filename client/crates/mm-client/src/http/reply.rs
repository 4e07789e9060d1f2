use crate::{ClientError, ClientResult};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

const FALLBACK_MESSAGE: &str = "Request failed";

/// A fully read HTTP response
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(ClientError::from_json)
    }

    /// Server-provided message, see [`error_message`]
    pub fn error_message(&self) -> String {
        error_message(self.status, &self.body)
    }

    /// Pass successful replies through; turn everything else into
    /// [`ClientError::Api`] carrying the server's message.
    #[track_caller]
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ClientError::api(self.status.as_u16(), self.error_message()))
    }
}

/// Extract the message a FastAPI backend puts in `detail`.
///
/// `detail` is either a string or a list of validation problems, in which
/// case the first `msg` wins. Anything else falls back to the status reason.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|mut value| value.get_mut("detail").map(Value::take));

    let message = match detail {
        Some(Value::String(message)) => Some(message),
        Some(Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(String::from),
        _ => None,
    };

    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or(FALLBACK_MESSAGE)
                .to_string()
        })
}
