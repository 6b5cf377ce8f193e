//! scholar-core - Session store and shared types for the scholar client.
//!
//! All authentication state flows through a [`SessionStore`], which is
//! constructed explicitly over an [`AuthApi`] and a [`SessionStorage`].
//!
//! # Example
//!
//! ```no_run
//! use scholar_core::{Credentials, MemoryStorage, SessionStore};
//! # use scholar_core::AuthApi;
//!
//! # async fn example(api: impl AuthApi) {
//! let store = SessionStore::init(api, MemoryStorage::new());
//! store.check_auth().await;
//!
//! match store.login(&Credentials::new("alice", "secret")).await {
//!     Ok(user) => println!("welcome {:?}", user.get("name")),
//!     Err(failure) => eprintln!("{}", failure),
//! }
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod guard;
pub mod image;
pub mod memory;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use guard::{GuardConfig, GuardDecision};
pub use image::{DownloadOutcome, FallbackAction, ImageState, ImageView};
pub use memory::MemoryStorage;
pub use session::{
    AuthFailure, PersistedSession, SessionHandle, SessionState, SessionStatus, SessionStore,
};
pub use tokens::BearerToken;
pub use traits::{AuthApi, AuthGrant, SessionStorage};
pub use types::{ApiUrl, User};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
