/// Font resolution
///
/// Maps the four logical caption fonts to renderable ab_glyph handles loaded
/// from system font files. Each family has per-OS candidate paths:
/// - Linux: /usr/share/fonts/truetype/msttcorefonts (when installed)
/// - macOS: /System/Library/Fonts/Supplemental and /Library/Fonts
/// - Windows: C:\Windows\Fonts
/// When no family-specific file exists we substitute the closest common
/// font, and as a last resort any parseable system font, so the library
/// always resolves on a working host. A host with no fonts at all is a
/// fatal environment fault.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use thiserror::Error;

use crate::state::style::FontFamily;

/// Errors while building the font library
#[derive(Error, Debug)]
pub enum FontError {
    #[error("no usable font file found for {family}")]
    NotFound { family: FontFamily },
}

/// Loaded fonts for every selectable family
pub struct FontLibrary {
    fonts: HashMap<FontFamily, FontVec>,
}

impl FontLibrary {
    /// Resolve and load all four families from system font files
    pub fn load() -> Result<Self, FontError> {
        let mut fonts = HashMap::new();

        for family in FontFamily::ALL {
            let font = load_family(family).ok_or(FontError::NotFound { family })?;
            fonts.insert(family, font);
        }

        println!("🔤 Font library loaded ({} families)", fonts.len());
        Ok(FontLibrary { fonts })
    }

    /// Get the renderable handle for a family.
    /// `load` guarantees every family is present.
    pub fn get(&self, family: FontFamily) -> &FontVec {
        self.fonts
            .get(&family)
            .expect("font library is loaded for all families")
    }
}

/// Try each candidate path for a family, then the generic system scan
fn load_family(family: FontFamily) -> Option<FontVec> {
    for candidate in candidate_paths(family) {
        if let Some(font) = load_font_file(Path::new(candidate)) {
            return Some(font);
        }
    }

    any_system_font()
}

/// Known file locations for a family, best match first
fn candidate_paths(family: FontFamily) -> &'static [&'static str] {
    match family {
        FontFamily::Impact => &[
            "/usr/share/fonts/truetype/msttcorefonts/Impact.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/impact.ttf",
            "/System/Library/Fonts/Supplemental/Impact.ttf",
            "/Library/Fonts/Impact.ttf",
            "C:\\Windows\\Fonts\\impact.ttf",
            // Closest common substitute: a heavy sans
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        ],
        FontFamily::TimesNewRoman => &[
            "/usr/share/fonts/truetype/msttcorefonts/Times_New_Roman.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/times.ttf",
            "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
            "C:\\Windows\\Fonts\\times.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        ],
        FontFamily::ComicSans => &[
            "/usr/share/fonts/truetype/msttcorefonts/Comic_Sans_MS.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/comic.ttf",
            "/System/Library/Fonts/Supplemental/Comic Sans MS.ttf",
            "C:\\Windows\\Fonts\\comic.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ],
        FontFamily::Papyrus => &[
            "/System/Library/Fonts/Supplemental/Papyrus.ttc",
            "C:\\Windows\\Fonts\\PAPYRUS.TTF",
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Italic.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        ],
    }
}

/// Read and parse one font file; None if missing or unparseable
fn load_font_file(path: &Path) -> Option<FontVec> {
    let bytes = fs::read(path).ok()?;
    FontVec::try_from_vec(bytes).ok()
}

/// Last resort: the first parseable .ttf/.otf anywhere in the system font
/// directories
fn any_system_font() -> Option<FontVec> {
    const FONT_DIRS: [&str; 4] = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ];

    for dir in FONT_DIRS {
        if let Some(font) = scan_dir(Path::new(dir)) {
            return Some(font);
        }
    }

    None
}

/// Depth-first search of a directory tree for a loadable font file
fn scan_dir(dir: &Path) -> Option<FontVec> {
    let entries = fs::read_dir(dir).ok()?;

    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }

        let is_font = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                ext == "ttf" || ext == "otf"
            })
            .unwrap_or(false);

        if is_font {
            if let Some(font) = load_font_file(&path) {
                return Some(font);
            }
        }
    }

    subdirs.into_iter().find_map(|sub| scan_dir(&sub))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_resolves() {
        let library = FontLibrary::load().expect("host has no usable fonts");

        for family in FontFamily::ALL {
            // get() panics if a family were missing
            let _ = library.get(family);
        }
    }

    #[test]
    fn test_missing_file_is_skipped() {
        assert!(load_font_file(Path::new("/nonexistent/font.ttf")).is_none());
    }
}
