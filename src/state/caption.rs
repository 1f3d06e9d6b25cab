/// Caption field model and edit lifecycle
///
/// Each meme has exactly two caption fields, one anchored to the top of the
/// image and one to the bottom. A field starts out showing its placeholder
/// ("TOP" or "BOTTOM"), which counts as semantically empty: it is cleared the
/// moment editing begins and restored if the user leaves the field empty.

use serde::{Deserialize, Serialize};

/// Default text shown in the top field when it has no user content
pub const DEFAULT_TOP_TEXT: &str = "TOP";

/// Default text shown in the bottom field when it has no user content
pub const DEFAULT_BOTTOM_TEXT: &str = "BOTTOM";

/// Which of the two caption slots a field occupies
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    /// The placeholder string for this slot
    pub fn placeholder(self) -> &'static str {
        match self {
            Position::Top => DEFAULT_TOP_TEXT,
            Position::Bottom => DEFAULT_BOTTOM_TEXT,
        }
    }
}

/// One editable caption overlay
///
/// `text` is the canonical value rendered into the composed meme. While
/// `is_placeholder` is true the field holds its default string and is treated
/// as empty by the edit lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionField {
    position: Position,
    text: String,
    is_placeholder: bool,
}

impl CaptionField {
    /// Create a field in its initial placeholder state
    pub fn new(position: Position) -> Self {
        CaptionField {
            position,
            text: position.placeholder().to_string(),
            is_placeholder: true,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The text currently displayed (placeholder or user content)
    pub fn display_text(&self) -> &str {
        &self.text
    }

    /// The user-entered value, empty while the placeholder is showing
    pub fn user_text(&self) -> &str {
        if self.is_placeholder {
            ""
        } else {
            &self.text
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }

    /// Focus gained: a placeholder field clears to empty so the user never
    /// has to delete the default text. No-op once the field holds content.
    pub fn begin_edit(&mut self) {
        if self.is_placeholder {
            self.text.clear();
            self.is_placeholder = false;
        }
    }

    /// Focus lost: an empty field reverts to its placeholder, anything else
    /// is kept exactly as the user typed it.
    pub fn end_edit(&mut self) {
        if self.text.is_empty() {
            self.text = self.position.placeholder().to_string();
            self.is_placeholder = true;
        }
    }

    /// Commit a proposed edit from the UI widget.
    ///
    /// The field owns the canonical value: the widget's naive edit is
    /// replaced with its uppercase transform, so non-placeholder text is
    /// always all-caps (the placeholders already are, by construction).
    pub fn set_input(&mut self, proposed: &str) {
        self.text = proposed.to_uppercase();
        self.is_placeholder = false;
    }

    /// Return to the initial placeholder state
    pub fn reset(&mut self) {
        self.text = self.position.placeholder().to_string();
        self.is_placeholder = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_placeholder() {
        let top = CaptionField::new(Position::Top);
        assert_eq!(top.display_text(), "TOP");
        assert!(top.is_placeholder());
        assert_eq!(top.user_text(), "");

        let bottom = CaptionField::new(Position::Bottom);
        assert_eq!(bottom.display_text(), "BOTTOM");
        assert!(bottom.is_placeholder());
    }

    #[test]
    fn test_begin_edit_clears_placeholder() {
        let mut field = CaptionField::new(Position::Top);
        field.begin_edit();

        assert_eq!(field.display_text(), "");
        assert!(!field.is_placeholder());
    }

    #[test]
    fn test_begin_edit_is_idempotent() {
        let mut field = CaptionField::new(Position::Top);
        field.begin_edit();
        field.set_input("hello");

        // Focusing again must not wipe user content
        field.begin_edit();
        assert_eq!(field.display_text(), "HELLO");
    }

    #[test]
    fn test_end_edit_restores_placeholder_when_empty() {
        let mut top = CaptionField::new(Position::Top);
        top.begin_edit();
        top.end_edit();
        assert_eq!(top.display_text(), "TOP");
        assert!(top.is_placeholder());

        let mut bottom = CaptionField::new(Position::Bottom);
        bottom.begin_edit();
        bottom.end_edit();
        assert_eq!(bottom.display_text(), "BOTTOM");
        assert!(bottom.is_placeholder());
    }

    #[test]
    fn test_end_edit_keeps_user_text() {
        let mut field = CaptionField::new(Position::Bottom);
        field.begin_edit();
        field.set_input("when it compiles");
        field.end_edit();

        assert_eq!(field.display_text(), "WHEN IT COMPILES");
        assert!(!field.is_placeholder());
    }

    #[test]
    fn test_input_is_forced_uppercase() {
        let mut field = CaptionField::new(Position::Top);
        field.begin_edit();
        field.set_input("hello");
        assert_eq!(field.display_text(), "HELLO");

        field.set_input("MiXeD case 42!");
        assert_eq!(field.display_text(), "MIXED CASE 42!");
    }

    #[test]
    fn test_deleting_all_text_then_blur_restores_placeholder() {
        let mut field = CaptionField::new(Position::Top);
        field.begin_edit();
        field.set_input("abc");
        // User deletes everything, field is editing-empty, not placeholder
        field.set_input("");
        assert_eq!(field.display_text(), "");
        assert!(!field.is_placeholder());

        field.end_edit();
        assert_eq!(field.display_text(), "TOP");
        assert!(field.is_placeholder());
    }

    #[test]
    fn test_reset_reproduces_initial_state() {
        let mut field = CaptionField::new(Position::Bottom);
        field.begin_edit();
        field.set_input("something");
        field.end_edit();

        field.reset();
        assert_eq!(field, CaptionField::new(Position::Bottom));
    }
}
