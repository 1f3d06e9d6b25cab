/// Caption style parameters
///
/// One StyleSpec instance is shared by both caption fields, so changing the
/// font affects them uniformly. It is mutated only by the font menu and read
/// by the render step. Serialized to JSON when handed to a persistence
/// collaborator.

use serde::{Deserialize, Serialize};

/// Default caption size in points at the reference width
pub const DEFAULT_FONT_SIZE: f32 = 40.0;

/// Default stroke thickness in pixels at the reference width
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// The four decorative fonts offered by the font menu
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Impact,
    TimesNewRoman,
    ComicSans,
    Papyrus,
}

impl FontFamily {
    /// All selectable families, in menu order
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Impact,
        FontFamily::TimesNewRoman,
        FontFamily::ComicSans,
        FontFamily::Papyrus,
    ];
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FontFamily::Impact => "Impact",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::ComicSans => "Comic Sans",
            FontFamily::Papyrus => "Papyrus",
        };
        write!(f, "{}", name)
    }
}

/// All style parameters for the two caption fields
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    /// Typeface used for both captions
    pub font_family: FontFamily,
    /// Caption size in points at the reference width
    pub font_size: f32,
    /// Text fill color, RGBA
    pub fill: [u8; 4],
    /// Outline color, RGBA
    pub stroke: [u8; 4],
    /// Outline thickness in pixels at the reference width
    pub stroke_width: u32,
}

impl Default for StyleSpec {
    /// Classic meme styling: Impact, white fill, black outline
    fn default() -> Self {
        StyleSpec {
            font_family: FontFamily::Impact,
            font_size: DEFAULT_FONT_SIZE,
            fill: [255, 255, 255, 255],
            stroke: [0, 0, 0, 255],
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StyleSpec {
    /// Convert to JSON string for the persistence handoff
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleSpec::default();
        assert_eq!(style.font_family, FontFamily::Impact);
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.fill, [255, 255, 255, 255]);
        assert_eq!(style.stroke, [0, 0, 0, 255]);
    }

    #[test]
    fn test_serialization() {
        let mut style = StyleSpec::default();
        style.font_family = FontFamily::Papyrus;
        style.font_size = 48.0;

        let json = style.to_json().unwrap();
        let restored = StyleSpec::from_json(&json).unwrap();

        assert_eq!(style, restored);
    }

    #[test]
    fn test_display_names_match_menu() {
        let names: Vec<String> = FontFamily::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            vec!["Impact", "Times New Roman", "Comic Sans", "Papyrus"]
        );
    }
}
