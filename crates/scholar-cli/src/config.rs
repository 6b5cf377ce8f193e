//! Resolved runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use scholar_core::{ApiUrl, SessionStore};
use scholar_file::FileStorage;
use scholar_http::{AuthorizedClient, HttpAuthApi, HttpClient};

use crate::cli::Cli;

/// The session store as the CLI wires it.
pub type CliStore = SessionStore<HttpAuthApi, FileStorage>;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiUrl,
    pub data_dir: PathBuf,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api = ApiUrl::new(&cli.api).context("Invalid API URL")?;

        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("", "", "scholar")
                .context("Could not determine data directory")?
                .data_dir()
                .to_path_buf(),
        };

        Ok(Self {
            api,
            data_dir,
            timeout: Duration::from_secs(cli.timeout),
        })
    }

    pub fn http_client(&self) -> Result<HttpClient> {
        HttpClient::with_timeout(self.api.clone(), self.timeout)
            .context("Failed to build HTTP client")
    }

    /// Restore the stored session.
    pub fn open_store(&self) -> Result<CliStore> {
        let api = HttpAuthApi::new(self.http_client()?);
        let storage = FileStorage::new(&self.data_dir);
        debug!(path = %storage.path().display(), api = %self.api, "Opening session store");
        Ok(SessionStore::init(api, storage))
    }

    /// A client that signs requests with `store`'s session.
    pub fn authorized_client(&self, store: &CliStore) -> AuthorizedClient {
        AuthorizedClient::new(store.api().client().clone(), store.handle())
    }
}
