//! Failure classification for remote calls.

use std::fmt;

pub(super) const GENERIC_FAILURE: &str = "Operation failed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// No response (connect error, timeout, broken body).
    Unreachable(String),
    /// 401 with no way to renew the credential.
    Unauthorized,
    /// Credential renewal failed; the local session was cleared.
    SignedOut,
    /// Structured rejection from the authority; carries the first reported message.
    Validation(String),
    /// Any other non-success status.
    Rejected { status: u16, message: String },
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteFailure::Unreachable(detail) => write!(f, "cannot reach server ({})", detail),
            RemoteFailure::Unauthorized => {
                write!(f, "unauthorized (run `frontfiles login` to sign in)")
            }
            RemoteFailure::SignedOut => {
                write!(f, "session expired; signed out (run `frontfiles login`)")
            }
            RemoteFailure::Validation(msg) => write!(f, "{}", msg),
            RemoteFailure::Rejected { status, message } => {
                write!(f, "request failed with status {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for RemoteFailure {}

/// Finds the classified failure anywhere in an error chain.
pub fn failure_of(err: &anyhow::Error) -> Option<&RemoteFailure> {
    err.chain().find_map(|e| e.downcast_ref::<RemoteFailure>())
}

/// The single line shown to a user for a failed operation.
pub fn user_message(err: &anyhow::Error) -> String {
    match failure_of(err) {
        Some(RemoteFailure::Validation(msg)) => msg.clone(),
        Some(RemoteFailure::Unreachable(_)) => "cannot reach server".to_string(),
        Some(other @ (RemoteFailure::Unauthorized | RemoteFailure::SignedOut)) => other.to_string(),
        Some(RemoteFailure::Rejected { .. }) => GENERIC_FAILURE.to_string(),
        None => match err.downcast_ref::<crate::tree::TreeError>() {
            Some(tree_err) => tree_err.to_string(),
            None => GENERIC_FAILURE.to_string(),
        },
    }
}

/// Extracts the first message from a structured error body.
///
/// Preference: `non_field_errors[0]`, then `detail`, then the first field entry.
pub fn validation_message(body: &serde_json::Value) -> Option<String> {
    let obj = body.as_object()?;

    if let Some(msg) = obj.get("non_field_errors").and_then(first_text) {
        return Some(msg);
    }
    if let Some(msg) = obj.get("detail").and_then(first_text) {
        return Some(msg);
    }
    obj.iter()
        .filter(|(k, _)| k.as_str() != "non_field_errors" && k.as_str() != "detail")
        .find_map(|(field, v)| first_text(v).map(|msg| format!("{}: {}", field, msg)))
}

fn first_text(v: &serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/remote/errors_tests.rs"]
mod tests;
