//! Client-side authentication session.
//!
//! The [`SessionStore`] owns the session state and is the only thing that
//! mutates it. Consumers observe it through a [`SessionHandle`].

mod handle;
mod persist;
mod state;
mod store;

pub use handle::SessionHandle;
pub use persist::PersistedSession;
pub use state::{SessionState, SessionStatus};
pub use store::{AuthFailure, SessionStore};
