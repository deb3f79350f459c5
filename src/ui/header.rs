/// Page header and footer
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::theme;
use crate::Message;

pub fn header<'a>() -> Element<'a, Message> {
    let content = column![
        text("✨ AI Image Editor").size(40).color(theme::ACCENT),
        text("Upload an image, describe the changes you want, and let the AI do the rest.")
            .size(16)
            .color(theme::MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([8, 0])
        .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    container(text("Powered by the Gemini API").size(13).color(theme::FAINT))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([16, 0])
        .into()
}
