/// Renderable description of the screen
///
/// Computed purely from the session so what the window shows can be
/// checked without opening one. The widget functions in this module's
/// siblings only turn a `Surface` into iced elements.

use iced::widget::image::Handle;

use crate::state::{Phase, Session};

/// What the edited-image panel shows
#[derive(Debug, Clone)]
pub enum EditedPanel<'a> {
    /// Request in flight
    Loading,
    /// Nothing generated yet
    Placeholder,
    /// The decoded result
    Image(&'a Handle),
}

/// The editor screen: both panels plus the prompt controls
#[derive(Debug, Clone)]
pub struct EditorSurface<'a> {
    pub original: &'a Handle,
    pub original_name: &'a str,
    pub edited: EditedPanel<'a>,
    pub error: Option<&'a str>,
    pub prompt: &'a str,
    /// Prompt field accepts input
    pub prompt_editable: bool,
    /// Submit button enabled
    pub can_submit: bool,
    /// "Choose another image" enabled
    pub can_reset: bool,
    pub busy: bool,
}

#[derive(Debug, Clone)]
pub enum Surface<'a> {
    /// No image yet: drop zone and file picker
    Intake { highlighted: bool },
    Editor(EditorSurface<'a>),
}

impl<'a> Surface<'a> {
    /// Derive the screen from the session
    ///
    /// `highlighted` is true while a file is being dragged over the window,
    /// `reading` while a newly supplied file is still being loaded.
    pub fn from_session(session: &'a Session, highlighted: bool, reading: bool) -> Self {
        let Some(image) = session.image() else {
            return Surface::Intake { highlighted };
        };

        let busy = session.is_busy();
        let edited = match (busy, session.result()) {
            (true, _) => EditedPanel::Loading,
            (false, Some(result)) => EditedPanel::Image(&result.handle),
            (false, None) => EditedPanel::Placeholder,
        };

        Surface::Editor(EditorSurface {
            original: &image.handle,
            original_name: &image.file_name,
            edited,
            error: session.last_error(),
            prompt: session.prompt(),
            prompt_editable: session.phase() == Phase::Ready,
            can_submit: session.can_submit() && !reading,
            can_reset: !busy,
            busy,
        })
    }
}
