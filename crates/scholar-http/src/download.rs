//! Image loading and download with fallback to opening the source.

use std::path::Path;

use tracing::{debug, warn};

use scholar_core::{DownloadOutcome, ImageView};

use crate::client::HttpClient;

/// Fetch the image behind `view` into `dest` and settle its load state.
///
/// Returns `true` once the view is loaded. On failure the view moves to
/// failed with the transport or backend error as its reason.
pub async fn load_image(client: &HttpClient, view: &mut ImageView, dest: &Path) -> bool {
    match client.download(view.src(), dest).await {
        Ok(_) => view.on_load(),
        Err(e) => {
            debug!(src = view.src(), error = %e, "Image failed to load");
            view.on_error(Some(e.to_string()));
            false
        }
    }
}

/// Download the image behind `view` to `dest`.
///
/// Never fails: if anything goes wrong the caller is told to open the
/// source directly instead.
pub async fn download_image(client: &HttpClient, view: &ImageView, dest: &Path) -> DownloadOutcome {
    let result = client.download(view.src(), dest).await;
    if let Err(ref e) = result {
        warn!(src = view.src(), error = %e, "Download failed, falling back to direct open");
    }
    view.resolve_download(result)
}
