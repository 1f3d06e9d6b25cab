/// State management module
///
/// This module holds the editor's data model:
/// - Caption fields and their edit lifecycle (caption.rs)
/// - Shared text styling (style.rs)
/// - Finished meme records and the session gallery (meme.rs)

pub mod caption;
pub mod style;
pub mod meme;
