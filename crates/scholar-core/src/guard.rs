//! Route guard decisions over a session snapshot.

use url::form_urlencoded;

use crate::session::SessionState;

/// Where unauthenticated visitors are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_path: String,
    /// Query parameter carrying the originally requested location.
    pub return_param: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            return_param: "from".to_string(),
        }
    }
}

/// What a protected route should do for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// An auth operation is in flight; show a neutral waiting state.
    Wait,
    /// Send the visitor to the login view, remembering where they were going.
    RedirectToLogin { location: String, return_to: String },
    /// Render the protected content.
    Allow,
}

/// Decide how a protected route at `requested` should render.
pub fn evaluate(state: &SessionState, requested: &str, config: &GuardConfig) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Wait;
    }

    if !state.is_authenticated || state.user.is_none() {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(&config.return_param, requested)
            .finish();
        return GuardDecision::RedirectToLogin {
            location: format!("{}?{}", config.login_path, query),
            return_to: requested.to_string(),
        };
    }

    GuardDecision::Allow
}
