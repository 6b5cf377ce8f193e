//! Seams between the session store and the outside world.

mod auth_api;
mod storage;

pub use auth_api::{AuthApi, AuthGrant};
pub use storage::SessionStorage;
