/// Finished meme records
///
/// A MemeRecord is built once per completed share and handed to whatever
/// persistence collaborator exists; the editor itself never retains the
/// composition. The in-memory SessionGallery is the default collaborator.

use chrono::{DateTime, Utc};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::style::FontFamily;

/// A finished meme: the captions plus both image artifacts
#[derive(Debug, Clone)]
pub struct MemeRecord {
    /// Top caption as rendered (placeholder text included)
    pub top_text: String,
    /// Bottom caption as rendered
    pub bottom_text: String,
    /// The background picture, if one was loaded
    pub original: Option<RgbaImage>,
    /// The flattened composition that was shared
    pub composed: RgbaImage,
    /// Font the captions were rendered with
    pub font_family: FontFamily,
    /// When the share completed
    pub created_at: DateTime<Utc>,
}

impl MemeRecord {
    pub fn new(
        top_text: String,
        bottom_text: String,
        original: Option<RgbaImage>,
        composed: RgbaImage,
        font_family: FontFamily,
    ) -> Self {
        MemeRecord {
            top_text,
            bottom_text,
            original,
            composed,
            font_family,
            created_at: Utc::now(),
        }
    }

    /// The serializable subset of the record (pixel data excluded)
    pub fn metadata(&self) -> MemeMetadata {
        MemeMetadata {
            top_text: self.top_text.clone(),
            bottom_text: self.bottom_text.clone(),
            width: self.composed.width(),
            height: self.composed.height(),
            font_family: self.font_family,
            created_at: self.created_at,
        }
    }
}

/// JSON-friendly description of a finished meme
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemeMetadata {
    pub top_text: String,
    pub bottom_text: String,
    pub width: u32,
    pub height: u32,
    pub font_family: FontFamily,
    pub created_at: DateTime<Utc>,
}

impl MemeMetadata {
    /// Convert to JSON string for downstream storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Accepts finished memes; storage format is up to the implementation
pub trait MemeStore {
    fn save(&mut self, record: MemeRecord);
}

/// Session-scoped in-memory store for finished memes
#[derive(Debug, Clone, Default)]
pub struct SessionGallery {
    records: Vec<MemeRecord>,
}

impl SessionGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn latest(&self) -> Option<&MemeRecord> {
        self.records.last()
    }
}

impl MemeStore for SessionGallery {
    fn save(&mut self, record: MemeRecord) {
        println!(
            "💾 Saved meme #{}: \"{}\" / \"{}\"",
            self.records.len() + 1,
            record.top_text,
            record.bottom_text
        );
        self.records.push(record);
    }
}
