//! Loading state of a named remote resource, and the messages shown when
//! loading it fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "There was a problem retrieving the data. Please try again in a minute.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchPhase {
    /// Nothing requested yet; the view treats this as loading.
    IdleFetching,
    Requesting,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T> {
    Requesting,
    Success(T),
    Failure { message: Value, status: Option<u16> },
    /// Request abandoned without a response.
    Error,
}

impl<T: DeserializeOwned> FetchAction<T> {
    /// Action for a finished request. A 2xx body that does not decode as `T`
    /// is a failure; other bodies are kept as JSON when they parse, as text
    /// otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            return match serde_json::from_str(body) {
                Ok(data) => FetchAction::Success(data),
                Err(e) => {
                    tracing::warn!("undecodable response body: {e}");
                    FetchAction::Failure {
                        message: Value::String(format!("Unexpected response: {e}")),
                        status: Some(status),
                    }
                }
            };
        }
        let message = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        FetchAction::Failure {
            message,
            status: Some(status),
        }
    }
}

impl<T> FetchAction<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchAction<U> {
        match self {
            FetchAction::Requesting => FetchAction::Requesting,
            FetchAction::Success(data) => FetchAction::Success(f(data)),
            FetchAction::Failure { message, status } => FetchAction::Failure { message, status },
            FetchAction::Error => FetchAction::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchState<T> {
    pub phase: FetchPhase,
    pub data: T,
    pub message: Value,
    pub failure_status: Option<u16>,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            phase: FetchPhase::IdleFetching,
            data: T::default(),
            message: Value::Null,
            failure_status: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, FetchPhase::IdleFetching | FetchPhase::Requesting)
    }

    /// Applies `action`, keeping whatever the action does not replace.
    pub fn reduce(self, action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Requesting => Self {
                phase: FetchPhase::Requesting,
                ..self
            },
            FetchAction::Success(data) => Self {
                phase: FetchPhase::Success,
                data,
                ..self
            },
            FetchAction::Failure { message, status } => Self {
                phase: FetchPhase::Failure,
                message,
                failure_status: status,
                ..self
            },
            FetchAction::Error => Self {
                phase: FetchPhase::Failure,
                ..self
            },
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        if self.phase != FetchPhase::Failure {
            return Vec::new();
        }
        error_messages(&[], &self.message, self.failure_status)
    }
}

/// Lines to show for a failed request. Messages given explicitly win over
/// anything derived from the response.
pub fn error_messages(explicit: &[String], failure_message: &Value, failure_status: Option<u16>) -> Vec<String> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    if failure_status == Some(503) {
        return vec![SERVICE_UNAVAILABLE_MESSAGE.to_string()];
    }
    let messages: Vec<String> = match failure_message {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{key}: {s}"),
                other => format!("{key}: {other}"),
            })
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    };
    if !messages.is_empty() {
        return messages;
    }
    match failure_status {
        Some(status) => vec![format!("The request failed with status {status}.")],
        None => vec!["The request failed.".to_string()],
    }
}
