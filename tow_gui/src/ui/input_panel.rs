//! Input Panel (Left Sidebar)
//!
//! Trailer configuration editor:
//! - Trailer label
//! - Load table (weight, distance from hitch) with add/remove
//! - Axle table (position) with add/remove
//! - Calculate button

use iced::widget::{
    button, column, container, row, rule, scrollable, text, text_input, Column, Row, Space,
};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the configuration sidebar
///
/// The `ratio` parameter determines the relative size of this panel vs the
/// results panel. A ratio of 0.35 means the sidebar takes 35% of the width.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel = column![
        text("Trailer Configuration").size(14),
        Space::new().height(8),
        labeled_input("Label:", &app.trailer_label, Message::TrailerLabelChanged),
        Space::new().height(10),
        view_load_table(app),
        Space::new().height(10),
        view_axle_table(app),
        Space::new().height(15),
        button(text("Calculate").size(12))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 14]))
            .style(button::primary),
    ]
    .spacing(6);

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the load table
fn view_load_table(app: &App) -> Element<'_, Message> {
    let header = row![
        text("#").size(10).width(Length::Fixed(24.0)),
        text("Weight (lb)").size(10).width(Length::Fixed(90.0)),
        text("Dist (in)").size(10).width(Length::Fixed(90.0)),
        text("").size(10).width(Length::Fixed(30.0)),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let mut load_rows: Column<'_, Message> = column![].spacing(4);

    for (i, load_row) in app.load_table.iter().enumerate() {
        let row_id = load_row.id;

        let num_label = text(format!("{}.", i + 1)).size(10).width(Length::Fixed(24.0));

        let weight_input = text_input("2000", &load_row.weight_lb)
            .on_input(move |s| Message::LoadWeightChanged(row_id, s))
            .width(Length::Fixed(90.0))
            .padding(2)
            .size(10);

        let distance_input = text_input("100", &load_row.distance_in)
            .on_input(move |s| Message::LoadDistanceChanged(row_id, s))
            .width(Length::Fixed(90.0))
            .padding(2)
            .size(10);

        // Only show delete button if more than one load remains
        let delete_btn: Element<'_, Message> = if app.load_table.len() > 1 {
            button(text("X").size(10))
                .on_press(Message::RemoveLoad(row_id))
                .padding(Padding::from([2, 6]))
                .into()
        } else {
            Space::new().width(30).into()
        };

        let load_row_widget: Row<'_, Message> = row![
            num_label,
            weight_input,
            distance_input,
            delete_btn,
        ]
        .spacing(4)
        .align_y(Alignment::Center);

        load_rows = load_rows.push(load_row_widget);
    }

    let add_load_btn = button(text("+ Add Load").size(10))
        .on_press(Message::AddLoad)
        .padding(Padding::from([4, 8]));

    column![
        text("Loads").size(12),
        Space::new().height(4),
        header,
        rule::horizontal(1),
        load_rows,
        Space::new().height(6),
        add_load_btn,
    ]
    .spacing(2)
    .into()
}

/// Render the axle table
fn view_axle_table(app: &App) -> Element<'_, Message> {
    let header = row![
        text("#").size(10).width(Length::Fixed(24.0)),
        text("Position (in)").size(10).width(Length::Fixed(90.0)),
        text("").size(10).width(Length::Fixed(30.0)),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let mut axle_rows: Column<'_, Message> = column![].spacing(4);

    for (i, axle_row) in app.axle_table.iter().enumerate() {
        let row_id = axle_row.id;

        let num_label = text(format!("{}.", i + 1)).size(10).width(Length::Fixed(24.0));

        let position_input = text_input("180", &axle_row.distance_in)
            .on_input(move |s| Message::AxleDistanceChanged(row_id, s))
            .width(Length::Fixed(90.0))
            .padding(2)
            .size(10);

        let delete_btn: Element<'_, Message> = if app.axle_table.len() > 1 {
            button(text("X").size(10))
                .on_press(Message::RemoveAxle(row_id))
                .padding(Padding::from([2, 6]))
                .into()
        } else {
            Space::new().width(30).into()
        };

        let axle_row_widget: Row<'_, Message> = row![num_label, position_input, delete_btn]
            .spacing(4)
            .align_y(Alignment::Center);

        axle_rows = axle_rows.push(axle_row_widget);
    }

    let add_axle_btn = button(text("+ Add Axle").size(10))
        .on_press(Message::AddAxle)
        .padding(Padding::from([4, 8]));

    column![
        text("Axles").size(12),
        Space::new().height(4),
        header,
        rule::horizontal(1),
        axle_rows,
        Space::new().height(6),
        add_axle_btn,
    ]
    .spacing(2)
    .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(60.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
