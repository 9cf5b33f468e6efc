//! Status Bar (Bottom)
//!
//! Displays the configuration summary on the left and the latest status
//! message on the right.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(load_count: usize, axle_count: usize, status: &str) -> Element<'_, Message> {
    let summary = format!(
        "{} load{} · {} axle{}",
        load_count,
        if load_count == 1 { "" } else { "s" },
        axle_count,
        if axle_count == 1 { "" } else { "s" },
    );

    row![
        text(summary).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
