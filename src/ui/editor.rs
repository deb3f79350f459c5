/// Editor screen: image panels, error banner and the prompt controls
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use super::display;
use super::surface::EditorSurface;
use super::theme;
use crate::Message;

const PROMPT_PLACEHOLDER: &str =
    "e.g. fill the sky with stars, add a cat wearing a hat, make the car red...";

fn error_banner<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(15))
        .padding(12)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(theme::error_banner)
        .into()
}

fn prompt_panel<'a>(surface: &EditorSurface<'a>) -> Element<'a, Message> {
    let mut input = text_input(PROMPT_PLACEHOLDER, surface.prompt)
        .padding(12)
        .size(16);

    // Leaving out on_input renders the field disabled
    if surface.prompt_editable {
        input = input.on_input(Message::PromptChanged);
        if surface.can_submit {
            input = input.on_submit(Message::Submit);
        }
    }

    let submit_label = if surface.busy { "Editing..." } else { "✨ Apply edit" };
    let submit = button(text(submit_label).size(16))
        .on_press_maybe(surface.can_submit.then_some(Message::Submit))
        .padding([12, 24])
        .width(Length::Fill);

    let reset = button(text("Choose another image").size(16))
        .on_press_maybe(surface.can_reset.then_some(Message::Reset))
        .padding([12, 24])
        .style(button::secondary);

    let content = column![
        text("Describe the edit you want").size(18).color(theme::ACCENT),
        input,
        row![submit, reset].spacing(16),
    ]
    .spacing(12);

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(theme::panel)
        .into()
}

pub fn view<'a>(surface: EditorSurface<'a>) -> Element<'a, Message> {
    let mut content = column![display::view(surface.original, surface.original_name, &surface.edited)].spacing(24);

    if let Some(message) = surface.error {
        content = content.push(error_banner(message));
    }

    content.push(prompt_panel(&surface)).into()
}
