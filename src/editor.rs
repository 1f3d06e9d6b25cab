/// Caption editor controller
///
/// Mediates between UI events and the meme data model: one optional
/// background picture, two caption fields, and a single shared StyleSpec.
/// Every operation runs synchronously on the UI event loop; the only
/// asynchronous boundaries (picking a picture, the share surface) resolve
/// to exactly one callback before any state changes here.

use ab_glyph::FontVec;
use image::RgbaImage;

use crate::render::compose;
use crate::share::{ChromeVisibility, ShareError, ShareOutcome, ShareSink};
use crate::state::caption::{CaptionField, Position};
use crate::state::meme::{MemeRecord, MemeStore};
use crate::state::style::{FontFamily, StyleSpec, DEFAULT_FONT_SIZE};

/// The single-screen editor state
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionEditor {
    /// Background picture, absent until one is acquired
    source: Option<RgbaImage>,
    top: CaptionField,
    bottom: CaptionField,
    /// Shared by both fields so font changes affect them uniformly
    style: StyleSpec,
}

impl Default for CaptionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptionEditor {
    /// Fresh session: both fields on their placeholders, no picture
    pub fn new() -> Self {
        CaptionEditor {
            source: None,
            top: CaptionField::new(Position::Top),
            bottom: CaptionField::new(Position::Bottom),
            style: StyleSpec::default(),
        }
    }

    pub fn source(&self) -> Option<&RgbaImage> {
        self.source.as_ref()
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    pub fn field(&self, position: Position) -> &CaptionField {
        match position {
            Position::Top => &self.top,
            Position::Bottom => &self.bottom,
        }
    }

    fn field_mut(&mut self, position: Position) -> &mut CaptionField {
        match position {
            Position::Top => &mut self.top,
            Position::Bottom => &mut self.bottom,
        }
    }

    /// Replace the background picture unconditionally
    pub fn load_image(&mut self, image: RgbaImage) {
        self.source = Some(image);
    }

    /// Change the caption typeface at the fixed default size.
    ///
    /// Restyles both fields but keeps their current text; only initial
    /// construction and `reset` touch the placeholders.
    pub fn select_font(&mut self, family: FontFamily) {
        self.style.font_family = family;
        self.style.font_size = DEFAULT_FONT_SIZE;
    }

    /// Focus gained on a field
    pub fn begin_edit(&mut self, position: Position) {
        self.field_mut(position).begin_edit();
    }

    /// Focus lost on a field
    pub fn end_edit(&mut self, position: Position) {
        self.field_mut(position).end_edit();
    }

    /// Commit a proposed edit; the controller forces it to uppercase
    pub fn text_input(&mut self, position: Position, proposed: &str) {
        self.field_mut(position).set_input(proposed);
    }

    /// Render the current state for the live on-screen preview
    pub fn preview(&self, font: &FontVec) -> RgbaImage {
        self.render(font)
    }

    /// Render the flattened export artifact.
    ///
    /// Chrome is suppressed for the duration of the render and restored to
    /// whatever it was before, so it can never appear in the output and the
    /// live view is unchanged afterwards.
    pub fn compose_artifact(
        &self,
        font: &FontVec,
        chrome: &mut dyn ChromeVisibility,
    ) -> RgbaImage {
        let was_visible = chrome.is_visible();
        chrome.set_visible(false);

        let artifact = self.render(font);

        chrome.set_visible(was_visible);
        artifact
    }

    /// Compose, hand off to the share surface, and on completion pass a
    /// MemeRecord to the store. Cancellation leaves everything unchanged.
    pub fn export_and_share(
        &mut self,
        font: &FontVec,
        chrome: &mut dyn ChromeVisibility,
        sink: &mut dyn ShareSink,
        store: &mut dyn MemeStore,
    ) -> Result<ShareOutcome, ShareError> {
        let composed = self.compose_artifact(font, chrome);

        let outcome = sink.share(&composed)?;
        if outcome == ShareOutcome::Completed {
            store.save(MemeRecord::new(
                self.top.display_text().to_string(),
                self.bottom.display_text().to_string(),
                self.source.clone(),
                composed,
                self.style.font_family,
            ));
        }

        Ok(outcome)
    }

    /// Back to the exact initial state: placeholders restored, no picture
    pub fn reset(&mut self) {
        self.top.reset();
        self.bottom.reset();
        self.source = None;
    }

    /// Flatten the background (or the blank stand-in canvas) with both
    /// captions as currently displayed
    fn render(&self, font: &FontVec) -> RgbaImage {
        let blank;
        let background = match &self.source {
            Some(image) => image,
            None => {
                blank = compose::blank_canvas();
                &blank
            }
        };

        compose::compose(
            background,
            self.top.display_text(),
            self.bottom.display_text(),
            &self.style,
            font,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::FontLibrary;
    use crate::state::meme::SessionGallery;
    use image::Rgba;

    /// Chrome stand-in that records every visibility change
    struct RecordingChrome {
        visible: bool,
        changes: Vec<bool>,
    }

    impl RecordingChrome {
        fn new(visible: bool) -> Self {
            RecordingChrome {
                visible,
                changes: Vec::new(),
            }
        }
    }

    impl ChromeVisibility for RecordingChrome {
        fn is_visible(&self) -> bool {
            self.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
            self.changes.push(visible);
        }
    }

    /// Share surface stand-in with a scripted outcome
    struct ScriptedSink {
        outcome: ShareOutcome,
        calls: usize,
    }

    impl ScriptedSink {
        fn new(outcome: ShareOutcome) -> Self {
            ScriptedSink { outcome, calls: 0 }
        }
    }

    impl ShareSink for ScriptedSink {
        fn share(&mut self, _artifact: &RgbaImage) -> Result<ShareOutcome, ShareError> {
            self.calls += 1;
            Ok(self.outcome)
        }
    }

    fn test_library() -> FontLibrary {
        FontLibrary::load().unwrap()
    }

    fn test_image() -> RgbaImage {
        RgbaImage::from_pixel(480, 360, Rgba([40, 40, 40, 255]))
    }

    #[test]
    fn test_begin_edit_clears_placeholder_once() {
        let mut editor = CaptionEditor::new();

        editor.begin_edit(Position::Top);
        assert_eq!(editor.field(Position::Top).display_text(), "");
        assert!(!editor.field(Position::Top).is_placeholder());

        editor.text_input(Position::Top, "hi");
        editor.begin_edit(Position::Top);
        assert_eq!(editor.field(Position::Top).display_text(), "HI");
    }

    #[test]
    fn test_end_edit_restores_per_position_placeholder() {
        let mut editor = CaptionEditor::new();

        editor.begin_edit(Position::Top);
        editor.begin_edit(Position::Bottom);
        editor.end_edit(Position::Top);
        editor.end_edit(Position::Bottom);

        assert_eq!(editor.field(Position::Top).display_text(), "TOP");
        assert_eq!(editor.field(Position::Bottom).display_text(), "BOTTOM");
    }

    #[test]
    fn test_text_input_is_uppercased() {
        let mut editor = CaptionEditor::new();

        editor.begin_edit(Position::Top);
        editor.text_input(Position::Top, "hello");

        assert_eq!(editor.field(Position::Top).display_text(), "HELLO");
    }

    #[test]
    fn test_select_font_keeps_field_text() {
        let mut editor = CaptionEditor::new();
        editor.begin_edit(Position::Top);
        editor.text_input(Position::Top, "unchanged");

        editor.select_font(FontFamily::ComicSans);

        assert_eq!(editor.style().font_family, FontFamily::ComicSans);
        assert_eq!(editor.field(Position::Top).display_text(), "UNCHANGED");
        assert_eq!(editor.field(Position::Bottom).display_text(), "BOTTOM");
    }

    #[test]
    fn test_load_image_replaces_unconditionally() {
        let mut editor = CaptionEditor::new();
        assert!(editor.source().is_none());

        editor.load_image(test_image());
        assert_eq!(editor.source().unwrap().dimensions(), (480, 360));

        let replacement = RgbaImage::new(10, 10);
        editor.load_image(replacement);
        assert_eq!(editor.source().unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn test_compose_hides_then_restores_visible_chrome() {
        let library = test_library();
        let font = library.get(FontFamily::Impact);
        let mut editor = CaptionEditor::new();
        editor.load_image(test_image());

        let mut chrome = RecordingChrome::new(true);
        let _ = editor.compose_artifact(font, &mut chrome);

        assert_eq!(chrome.changes, vec![false, true]);
        assert!(chrome.is_visible());
    }

    #[test]
    fn test_compose_leaves_hidden_chrome_hidden() {
        let library = test_library();
        let font = library.get(FontFamily::Impact);
        let editor = CaptionEditor::new();

        let mut chrome = RecordingChrome::new(false);
        let _ = editor.compose_artifact(font, &mut chrome);

        assert_eq!(chrome.changes, vec![false, false]);
        assert!(!chrome.is_visible());
    }

    #[test]
    fn test_compose_without_picture_uses_blank_canvas() {
        let library = test_library();
        let font = library.get(FontFamily::Impact);
        let editor = CaptionEditor::new();

        let mut chrome = RecordingChrome::new(true);
        let artifact = editor.compose_artifact(font, &mut chrome);

        assert_eq!(artifact.dimensions(), compose::blank_canvas().dimensions());
    }

    #[test]
    fn test_reset_reproduces_initial_state() {
        let mut editor = CaptionEditor::new();
        editor.load_image(test_image());
        editor.begin_edit(Position::Top);
        editor.text_input(Position::Top, "edited");
        editor.begin_edit(Position::Bottom);
        editor.end_edit(Position::Bottom);

        editor.reset();

        assert_eq!(editor, CaptionEditor::new());
    }

    #[test]
    fn test_completed_share_stores_one_record() {
        let library = test_library();
        let font = library.get(FontFamily::Impact);
        let mut editor = CaptionEditor::new();
        editor.load_image(test_image());
        editor.begin_edit(Position::Top);
        editor.text_input(Position::Top, "stored");

        let mut chrome = RecordingChrome::new(true);
        let mut sink = ScriptedSink::new(ShareOutcome::Completed);
        let mut gallery = SessionGallery::new();

        let outcome = editor
            .export_and_share(font, &mut chrome, &mut sink, &mut gallery)
            .unwrap();

        assert_eq!(outcome, ShareOutcome::Completed);
        assert_eq!(sink.calls, 1);
        assert_eq!(gallery.count(), 1);

        let record = gallery.latest().unwrap();
        assert_eq!(record.top_text, "STORED");
        assert_eq!(record.bottom_text, "BOTTOM");
        assert!(record.original.is_some());
    }

    #[test]
    fn test_cancelled_share_changes_nothing() {
        let library = test_library();
        let font = library.get(FontFamily::Impact);
        let mut editor = CaptionEditor::new();
        editor.load_image(test_image());
        let before = editor.clone();

        let mut chrome = RecordingChrome::new(true);
        let mut sink = ScriptedSink::new(ShareOutcome::Cancelled);
        let mut gallery = SessionGallery::new();

        let outcome = editor
            .export_and_share(font, &mut chrome, &mut sink, &mut gallery)
            .unwrap();

        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert_eq!(gallery.count(), 0);
        assert_eq!(editor, before);
        assert!(chrome.is_visible());
    }
}
