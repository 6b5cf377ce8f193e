//! scholar-http - HTTP transport for the scholar session store.

mod api;
mod authorized;
mod client;
mod download;
mod endpoints;

pub use api::HttpAuthApi;
pub use authorized::AuthorizedClient;
pub use client::{DEFAULT_TIMEOUT, HttpClient};
pub use download::{download_image, load_image};
pub use endpoints::Endpoints;
