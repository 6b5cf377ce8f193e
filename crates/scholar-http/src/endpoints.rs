//! Endpoint paths and request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend endpoint paths, relative to the API base URL.
///
/// Paths differ between deployments; the defaults match the stock backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub login: String,
    pub register: String,
    pub logout: String,
    pub profile: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/auth/login".to_string(),
            register: "/auth/register".to_string(),
            logout: "/auth/logout".to_string(),
            profile: "/user/profile".to_string(),
        }
    }
}

/// Response from login and register.
#[derive(Debug, Deserialize)]
pub(crate) struct GrantResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: Value,
}

/// Error payload shapes the backend produces.
///
/// `detail` is either a plain string or a list of validation entries that
/// each carry a `msg`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    pub fn into_message(self) -> Option<String> {
        let from_detail = match self.detail {
            Some(Value::String(detail)) => Some(detail),
            Some(Value::Array(entries)) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        };

        let usable = |m: &String| !m.is_empty();
        from_detail
            .filter(usable)
            .or_else(|| self.message.filter(usable))
    }
}
