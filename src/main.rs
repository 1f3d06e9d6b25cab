use iced::widget::image::Handle as PreviewHandle;
use iced::widget::{button, column, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use image::RgbaImage;

// Declare the application modules
mod editor;
mod render;
mod share;
mod state;

use editor::CaptionEditor;
use render::fonts::FontLibrary;
use share::{
    ChromeVisibility, DialogImageSource, ImageSource, SaveDialogSink, ShareOutcome, SourceKind,
};
use state::caption::Position;
use state::meme::SessionGallery;
use state::style::FontFamily;

/// Main application state
struct MemeStudio {
    /// The caption editor controller
    editor: CaptionEditor,
    /// Renderable handles for the four caption fonts
    fonts: FontLibrary,
    /// Finished memes from this session
    gallery: SessionGallery,
    /// Native picker used to acquire background pictures
    picker: DialogImageSource,
    /// The toolbar row; doubles as the chrome collaborator
    toolbar: Toolbar,
    /// Live preview of the current composition
    preview: PreviewHandle,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User asked for a new background picture
    PickImage(SourceKind),
    /// Background decode finished (or failed)
    ImageLoaded(Result<RgbaImage, String>),
    /// User chose a caption font from the menu
    FontChosen(FontFamily),
    /// A caption widget proposed new text
    CaptionChanged(Position, String),
    /// User pressed enter in a caption widget
    CaptionSubmitted(Position),
    /// User clicked Share
    Share,
    /// User clicked Reset
    Reset,
}

impl MemeStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot render captions
        // without any usable system font
        let fonts = FontLibrary::load()
            .expect("Failed to load caption fonts. No usable system font found.");

        let editor = CaptionEditor::new();
        println!("🖼️  Meme Studio initialized");

        let mut app = MemeStudio {
            editor,
            fonts,
            gallery: SessionGallery::new(),
            picker: DialogImageSource,
            toolbar: Toolbar { visible: true },
            preview: PreviewHandle::from_rgba(1, 1, vec![0, 0, 0, 0]),
            status: "Ready. Pick a picture to get started.".to_string(),
        };
        app.refresh_preview();

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage(kind) => {
                // Show the native picker; None means the user cancelled and
                // nothing changes
                match self.picker.acquire(kind) {
                    Some(path) => {
                        self.status = format!("Loading {}...", path.display());
                        return Task::perform(
                            render::loader::load_background(path),
                            Message::ImageLoaded,
                        );
                    }
                    None => {
                        self.status = "Picture selection cancelled.".to_string();
                    }
                }

                Task::none()
            }
            Message::ImageLoaded(Ok(picture)) => {
                self.editor.load_image(picture);
                self.refresh_preview();
                self.status = "Picture loaded. Tap a caption to edit it.".to_string();
                Task::none()
            }
            Message::ImageLoaded(Err(error)) => {
                eprintln!("⚠️  Failed to load picture: {}", error);
                self.status = format!("⚠️  {}", error);
                Task::none()
            }
            Message::FontChosen(family) => {
                self.editor.select_font(family);
                self.refresh_preview();
                self.status = format!("Font changed to {}.", family);
                Task::none()
            }
            Message::CaptionChanged(position, proposed) => {
                // iced has no separate focus-gained event, so the first
                // keystroke into a placeholder field doubles as begin_edit
                if self.editor.field(position).is_placeholder() {
                    self.editor.begin_edit(position);
                }
                self.editor.text_input(position, &proposed);
                self.refresh_preview();
                Task::none()
            }
            Message::CaptionSubmitted(position) => {
                self.editor.end_edit(position);
                self.refresh_preview();
                Task::none()
            }
            Message::Share => {
                let family = self.editor.style().font_family;
                let mut sink = SaveDialogSink;

                match self.editor.export_and_share(
                    self.fonts.get(family),
                    &mut self.toolbar,
                    &mut sink,
                    &mut self.gallery,
                ) {
                    Ok(ShareOutcome::Completed) => {
                        self.status = format!(
                            "✅ Meme shared! {} this session.",
                            self.gallery.count()
                        );
                    }
                    Ok(ShareOutcome::Cancelled) => {
                        self.status = "Share cancelled.".to_string();
                    }
                    Err(error) => {
                        eprintln!("⚠️  Share failed: {}", error);
                        self.status = format!("⚠️  Share failed: {}", error);
                    }
                }

                Task::none()
            }
            Message::Reset => {
                self.editor.reset();
                self.refresh_preview();
                self.status = "Editor reset.".to_string();
                Task::none()
            }
        }
    }

    /// Re-render the live preview after any state change
    fn refresh_preview(&mut self) {
        let family = self.editor.style().font_family;
        let rendered = self.editor.preview(self.fonts.get(family));
        let (width, height) = rendered.dimensions();
        self.preview = PreviewHandle::from_rgba(width, height, rendered.into_raw());
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![].spacing(12).padding(16);

        // The toolbar is chrome: it disappears while an export renders
        if self.toolbar.is_visible() {
            content = content.push(self.toolbar_row());
        }

        content = content
            .push(self.caption_input(Position::Top))
            .push(
                iced::widget::image(self.preview.clone())
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(self.caption_input(Position::Bottom))
            .push(text(&self.status).size(14));

        content.align_x(Alignment::Center).into()
    }

    /// The chrome row: picture sources, font menu, share and reset
    fn toolbar_row(&self) -> Element<Message> {
        // Camera capture is only offered where the host supports it
        let mut camera = button("Camera").padding(8);
        if self.picker.is_available(SourceKind::Camera) {
            camera = camera.on_press(Message::PickImage(SourceKind::Camera));
        }

        row![
            camera,
            button("Album")
                .on_press(Message::PickImage(SourceKind::Library))
                .padding(8),
            pick_list(
                FontFamily::ALL,
                Some(self.editor.style().font_family),
                Message::FontChosen,
            )
            .padding(8),
            button("Share").on_press(Message::Share).padding(8),
            button("Reset").on_press(Message::Reset).padding(8),
        ]
        .spacing(10)
        .into()
    }

    /// One caption text input, showing its placeholder while empty
    fn caption_input(&self, position: Position) -> Element<Message> {
        let field = self.editor.field(position);

        text_input(position.placeholder(), field.user_text())
            .on_input(move |proposed| Message::CaptionChanged(position, proposed))
            .on_submit(Message::CaptionSubmitted(position))
            .size(22)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// The toolbar's visibility state, bracketed around exports so toolbars
/// never appear in a shared meme
#[derive(Debug, Clone, Copy)]
struct Toolbar {
    visible: bool,
}

impl ChromeVisibility for Toolbar {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

fn main() -> iced::Result {
    iced::application(
        "Meme Studio",
        MemeStudio::update,
        MemeStudio::view,
    )
    .theme(MemeStudio::theme)
    .centered()
    .run_with(MemeStudio::new)
}
