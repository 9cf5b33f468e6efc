//! Toolbar component
//!
//! Application header with the title and a settings dropdown (dark mode).

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with title and settings button
pub fn view_header(trailer_label: &str, settings_menu_open: bool) -> Element<'_, Message> {
    let settings_button_text = if settings_menu_open {
        "Settings ▲"
    } else {
        "Settings ▼"
    };
    let settings_button = button(text(settings_button_text).size(11))
        .on_press(Message::ToggleSettingsMenu)
        .padding(Padding::from([4, 8]))
        .style(if settings_menu_open {
            button::primary
        } else {
            button::secondary
        });

    row![
        text("Towcheck").size(28),
        Space::new().width(12),
        text("Trailer Tongue Weight Calculator").size(14),
        Space::new().width(Length::Fill),
        text(trailer_label).size(14),
        Space::new().width(12),
        settings_button,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the settings dropdown menu
pub fn view_settings_menu(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let dropdown_content = column![button(text(theme_label).size(10))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 12]))
        .width(Length::Fill)
        .style(button::secondary),]
    .spacing(2)
    .width(Length::Fixed(130.0));

    row![
        Space::new().width(Length::Fill),
        container(dropdown_content)
            .padding(4)
            .style(container::bordered_box),
    ]
    .into()
}
