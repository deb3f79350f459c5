/// Colors and container styles shared by the widgets
use iced::widget::container;
use iced::{Border, Color, Theme};

pub const ACCENT: Color = Color::from_rgb(0.37, 0.83, 0.77);
pub const MUTED: Color = Color::from_rgb(0.61, 0.64, 0.69);
pub const FAINT: Color = Color::from_rgb(0.42, 0.45, 0.50);
const PANEL: Color = Color::from_rgba(0.12, 0.16, 0.22, 0.6);
const PANEL_BORDER: Color = Color::from_rgb(0.22, 0.25, 0.32);
const ERROR_BG: Color = Color::from_rgba(0.50, 0.11, 0.11, 0.5);
const ERROR_BORDER: Color = Color::from_rgb(0.73, 0.11, 0.11);
const ERROR_TEXT: Color = Color::from_rgb(0.99, 0.65, 0.65);

/// Rounded dark card used for the image panels and the prompt box
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(PANEL.into()),
        border: Border {
            color: PANEL_BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Drop zone, brighter while a file hovers over the window
pub fn drop_zone(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(PANEL.into()),
        border: Border {
            color: if highlighted { ACCENT } else { PANEL_BORDER },
            width: 2.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(ERROR_BG.into()),
        text_color: Some(ERROR_TEXT),
        border: Border {
            color: ERROR_BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
