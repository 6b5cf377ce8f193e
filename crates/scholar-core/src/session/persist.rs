//! Persisted projection of the session state.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::tokens::BearerToken;
use crate::types::User;
use crate::Result;

use super::SessionState;

/// The subset of [`SessionState`] written to durable storage.
///
/// `is_loading` is deliberately absent: a restart never resumes mid-request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub token: Option<BearerToken>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl PersistedSession {
    /// Project the full state onto its persisted subset.
    pub fn project(state: &SessionState) -> Self {
        Self {
            token: state.token.clone(),
            user: state.user.clone(),
            is_authenticated: state.is_authenticated,
        }
    }

    /// Rebuild session state at startup.
    ///
    /// A blob that claims to be authenticated without both a token and a
    /// user is downgraded, so consumers never see a partial session.
    pub fn restore(self) -> SessionState {
        let is_authenticated = self.is_authenticated && self.token.is_some() && self.user.is_some();
        SessionState {
            user: self.user,
            token: self.token,
            is_authenticated,
            is_loading: false,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            StorageError::Corrupt {
                message: e.to_string(),
            }
            .into()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            StorageError::Corrupt {
                message: e.to_string(),
            }
            .into()
        })
    }
}
