/// Side-by-side original / edited image panels
use iced::widget::{column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::surface::EditedPanel;
use super::theme;
use crate::Message;

const PANEL_HEIGHT: f32 = 400.0;

/// One titled panel wrapping `body`
fn panel<'a>(title: &'a str, accent: bool, body: Element<'a, Message>) -> Element<'a, Message> {
    let title = text(title)
        .size(18)
        .color(if accent { theme::ACCENT } else { theme::MUTED });

    let body = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    container(column![title, body].spacing(12).align_x(Alignment::Center))
        .padding(16)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(PANEL_HEIGHT))
        .style(theme::panel)
        .into()
}

fn picture<'a>(handle: &image::Handle) -> Element<'a, Message> {
    image(handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loading<'a>() -> Element<'a, Message> {
    column![
        text("⏳").size(40),
        text("Applying the magic...").size(18).color(theme::MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}

fn placeholder<'a>() -> Element<'a, Message> {
    column![
        text("✨").size(40).color(theme::FAINT),
        text("Your edited image will appear here").color(theme::FAINT),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

pub fn view<'a>(
    original: &'a image::Handle,
    original_name: &'a str,
    edited: &EditedPanel<'a>,
) -> Element<'a, Message> {
    let edited_body = match edited {
        EditedPanel::Loading => loading(),
        EditedPanel::Placeholder => placeholder(),
        EditedPanel::Image(handle) => picture(handle),
    };

    row![
        panel(original_name, false, picture(original)),
        text("→").size(32).color(theme::FAINT),
        panel("Edited image", true, edited_body),
    ]
    .spacing(24)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}
