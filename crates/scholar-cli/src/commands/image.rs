//! Image command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use scholar_core::{DownloadOutcome, FallbackAction, ImageState, ImageView};
use scholar_http::{download_image, load_image};

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Image URL
    pub url: String,

    /// Where to save the image
    #[arg(long, short)]
    pub out: PathBuf,

    /// Extra load attempts before falling back
    #[arg(long, default_value = "0")]
    pub retries: u32,
}

pub async fn run(args: ImageArgs, config: &Config) -> Result<()> {
    let client = config.http_client()?;
    let mut view = ImageView::new(args.url);

    let mut retries = args.retries;
    while !load_image(&client, &mut view, &args.out).await {
        if retries == 0 || !view.retry() {
            break;
        }
        retries -= 1;
        debug!(src = view.src(), remaining = retries, "Retrying image load");
    }

    if let ImageState::Failed { reason } = view.state() {
        output::error(&format!(
            "Image failed to load: {}",
            reason.as_deref().unwrap_or("unknown error")
        ));
    } else {
        output::success("Image saved");
        output::field("Path", &args.out.display().to_string());
        return Ok(());
    }

    for action in view.affordances() {
        match action {
            FallbackAction::OpenInNewContext => output::field("Open in new context", view.src()),
            FallbackAction::Download => match download_image(&client, &view, &args.out).await {
                DownloadOutcome::Saved(path) => {
                    output::success("Image downloaded");
                    output::field("Path", &path.display().to_string());
                }
                DownloadOutcome::OpenDirectly(url) => {
                    output::error("Image could not be downloaded");
                    output::field("Open directly", &url);
                }
            },
        }
    }

    Ok(())
}
