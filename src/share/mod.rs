/// External collaborators at the system edge
///
/// The editor talks to the host platform through four small contracts:
/// acquiring a picture, toggling view chrome, presenting a share surface,
/// and (optionally) persisting finished memes. The desktop implementations
/// here are native-dialog glue; tests substitute their own.

use std::path::PathBuf;

use chrono::Utc;
use image::RgbaImage;
use rfd::FileDialog;
use thiserror::Error;

pub use crate::state::meme::MemeStore;

/// Where a new background picture comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Camera,
    Library,
}

/// Provides background pictures on request.
///
/// `acquire` returns the chosen file, or `None` when the user cancels; no
/// partial state changes happen either way. Decoding is a separate step so
/// it can run off the UI thread.
pub trait ImageSource {
    /// Whether this source can be offered at all on the current host
    fn is_available(&self, kind: SourceKind) -> bool;

    /// Ask the user for a picture. `None` means cancelled.
    fn acquire(&self, kind: SourceKind) -> Option<PathBuf>;
}

/// Picks image files with the native open dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogImageSource;

impl ImageSource for DialogImageSource {
    fn is_available(&self, kind: SourceKind) -> bool {
        // No camera capture on desktop; the toolbar disables that button
        match kind {
            SourceKind::Camera => false,
            SourceKind::Library => true,
        }
    }

    fn acquire(&self, kind: SourceKind) -> Option<PathBuf> {
        if !self.is_available(kind) {
            return None;
        }

        FileDialog::new()
            .set_title("Choose a Picture")
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
            .pick_file()
    }
}

/// Show/hide auxiliary view decorations (toolbars).
///
/// Used only to bracket composition so chrome never leaks into the
/// exported artifact.
pub trait ChromeVisibility {
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

/// How a share attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The artifact was handed off (saved, sent, ...)
    Completed,
    /// The user backed out; nothing was written
    Cancelled,
}

/// Errors from the share surface itself (cancellation is not an error)
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("failed to write shared image: {0}")]
    Write(#[from] image::ImageError),
}

/// Presents a share surface for one rendered image and reports the outcome
/// exactly once.
pub trait ShareSink {
    fn share(&mut self, artifact: &RgbaImage) -> Result<ShareOutcome, ShareError>;
}

/// Shares by saving a PNG through the native save dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveDialogSink;

impl ShareSink for SaveDialogSink {
    fn share(&mut self, artifact: &RgbaImage) -> Result<ShareOutcome, ShareError> {
        let mut dialog = FileDialog::new()
            .set_title("Save Meme")
            .add_filter("PNG image", &["png"])
            .set_file_name(default_export_name());

        // Start in the user's Pictures folder when we can find it
        if let Some(pictures) = dirs_next::picture_dir().or_else(dirs_next::home_dir) {
            dialog = dialog.set_directory(pictures);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(ShareOutcome::Cancelled);
        };

        artifact.save(&path)?;
        println!("📤 Shared meme to {}", path.display());

        Ok(ShareOutcome::Completed)
    }
}

/// Timestamped default filename for exported memes
fn default_export_name() -> String {
    format!("meme-{}.png", Utc::now().format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_is_unavailable_on_desktop() {
        let source = DialogImageSource;
        assert!(!source.is_available(SourceKind::Camera));
        assert!(source.is_available(SourceKind::Library));
    }

    #[test]
    fn test_acquire_from_unavailable_source_is_cancelled() {
        let source = DialogImageSource;
        assert_eq!(source.acquire(SourceKind::Camera), None);
    }

    #[test]
    fn test_default_export_name_is_png() {
        let name = default_export_name();
        assert!(name.starts_with("meme-"));
        assert!(name.ends_with(".png"));
    }
}
