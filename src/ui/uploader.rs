/// Intake surface shown while no image is loaded
///
/// Files can be dropped anywhere on the window (the window events are
/// routed by the subscription in `main.rs`); this surface only reflects
/// the hover state and offers the file picker.
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use super::theme;
use crate::Message;

pub fn view<'a>(highlighted: bool) -> Element<'a, Message> {
    let title = if highlighted {
        "Drop it!"
    } else {
        "Drag and drop your image here"
    };

    let content = column![
        text("🖼").size(56),
        text(title).size(22),
        text("or").color(theme::MUTED),
        button(text("Choose a file").size(16))
            .on_press(Message::PickImage)
            .padding([12, 24]),
        text("Supports: PNG, JPG, WEBP, GIF").size(12).color(theme::FAINT),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .padding(56)
        .center_x(Length::Fixed(640.0))
        .style(theme::drop_zone(highlighted))
        .into()
}
