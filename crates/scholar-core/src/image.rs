//! Image display with a download fallback.
//!
//! An image starts out loading and settles as either loaded or failed. A
//! failed image offers two ways out: open the source in a new context, or
//! download it. A download that fails falls back to opening the source
//! directly.

use std::path::PathBuf;

/// Load state of a displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Loaded,
    Failed { reason: Option<String> },
}

/// Affordances offered on a failed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAction {
    OpenInNewContext,
    Download,
}

/// Result of the download affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The image was written to disk.
    Saved(PathBuf),
    /// Downloading failed; the source should be opened as-is.
    OpenDirectly(String),
}

/// An image being displayed from `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    src: String,
    state: ImageState,
}

impl ImageView {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            state: ImageState::Loading,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Record a successful load. Only valid while loading.
    pub fn on_load(&mut self) -> bool {
        if self.state != ImageState::Loading {
            return false;
        }
        self.state = ImageState::Loaded;
        true
    }

    /// Record a failed load. Only valid while loading.
    pub fn on_error(&mut self, reason: Option<String>) -> bool {
        if self.state != ImageState::Loading {
            return false;
        }
        self.state = ImageState::Failed { reason };
        true
    }

    /// Try loading again after a failure.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.state, ImageState::Failed { .. }) {
            return false;
        }
        self.state = ImageState::Loading;
        true
    }

    pub fn affordances(&self) -> &'static [FallbackAction] {
        match self.state {
            ImageState::Failed { .. } => {
                &[FallbackAction::OpenInNewContext, FallbackAction::Download]
            }
            _ => &[],
        }
    }

    /// Map the result of a download attempt onto what the viewer should do.
    pub fn resolve_download<E>(&self, result: Result<PathBuf, E>) -> DownloadOutcome {
        match result {
            Ok(path) => DownloadOutcome::Saved(path),
            Err(_) => DownloadOutcome::OpenDirectly(self.src.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_once() {
        let mut view = ImageView::new("https://cdn.example.com/a.png");
        assert!(view.affordances().is_empty());
        assert!(view.on_load());
        assert_eq!(view.state(), &ImageState::Loaded);
        assert!(!view.on_error(None));
        assert_eq!(view.state(), &ImageState::Loaded);
    }

    #[test]
    fn failure_offers_fallbacks_and_retry() {
        let mut view = ImageView::new("https://cdn.example.com/a.png");
        assert!(view.on_error(Some("404".to_string())));
        assert_eq!(
            view.affordances(),
            &[FallbackAction::OpenInNewContext, FallbackAction::Download]
        );

        assert!(view.retry());
        assert_eq!(view.state(), &ImageState::Loading);
        assert!(!view.retry());
    }

    #[test]
    fn failed_download_opens_directly() {
        let view = ImageView::new("https://cdn.example.com/a.png");
        let outcome = view.resolve_download::<()>(Err(()));
        assert_eq!(
            outcome,
            DownloadOutcome::OpenDirectly("https://cdn.example.com/a.png".to_string())
        );

        let outcome = view.resolve_download::<()>(Ok(PathBuf::from("a.png")));
        assert_eq!(outcome, DownloadOutcome::Saved(PathBuf::from("a.png")));
    }
}
