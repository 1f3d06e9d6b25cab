/// Background picture decoding
///
/// Decoding a picked file can take a while for large photos, so it runs
/// under spawn_blocking and is surfaced to the UI as a single message.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tokio::task;

/// Decode a picked image file into an RGBA buffer.
///
/// No validation beyond decodability: whatever the picker returned is used
/// as-is.
pub async fn load_background(path: PathBuf) -> Result<RgbaImage, String> {
    // Spawn blocking because image decode is CPU-intensive
    task::spawn_blocking(move || load_background_blocking(&path))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of background loading
fn load_background_blocking(path: &Path) -> Result<RgbaImage, String> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()));
    }

    let decoded = image::open(path)
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

    let rgba = decoded.to_rgba8();
    println!(
        "🖼️  Loaded background: {}x{} from {}",
        rgba.width(),
        rgba.height(),
        path.display()
    );

    Ok(rgba)
}
