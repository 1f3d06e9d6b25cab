/// Image composition module
///
/// This module handles:
/// - Flattening the background and both captions into one raster (compose.rs)
/// - Resolving logical font names to renderable handles (fonts.rs)
/// - Decoding background pictures off the UI thread (loader.rs)

pub mod compose;
pub mod fonts;
pub mod loader;
