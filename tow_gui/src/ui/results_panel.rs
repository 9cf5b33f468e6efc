//! Results Panel (Right Side)
//!
//! Shows one of:
//! - The error message when parsing or calculation failed
//! - A prompt when nothing has been calculated yet
//! - Metrics, the range check with warning text, and the layout diagram

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use tow_core::calculations::tongue::{
    TongueResult, TrailerInput, RECOMMENDED_MAX_PCT, RECOMMENDED_MIN_PCT,
};

use super::shared::diagrams::{TrailerDiagram, TrailerDiagramData};
use crate::{App, Message};

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let (Some(ref input), Some(ref result)) = (&app.calc_input, &app.result) {
        view_results(input, result)
    } else {
        column![
            text("Results").size(14),
            Space::new().height(8),
            text("Enter the trailer configuration on the left,")
                .size(12)
                .color([0.5, 0.5, 0.5]),
            text("then press Calculate.").size(12).color([0.5, 0.5, 0.5]),
        ]
    };

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the calculation results with the layout diagram
fn view_results<'a>(input: &'a TrailerInput, result: &'a TongueResult) -> Column<'a, Message> {
    let results_text = view_metrics(result);
    let diagram_data = TrailerDiagramData::from_calc(input, result);
    let diagram = TrailerDiagram::new(diagram_data);

    let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
        .width(Length::Fill)
        .height(Length::Fixed(260.0))
        .into();

    results_text
        .push(Space::new().height(15))
        .push(text("Trailer Load Layout").size(14))
        .push(Space::new().height(8))
        .push(canvas_widget)
}

/// Render the metric lines and the range check
fn view_metrics(result: &TongueResult) -> Column<'_, Message> {
    let headline = if result.is_in_range() {
        text(format!(
            "TONGUE WEIGHT {} ({:.0}-{:.0}% recommended)",
            result.status.display_name(),
            RECOMMENDED_MIN_PCT,
            RECOMMENDED_MAX_PCT
        ))
        .size(16)
        .color([0.2, 0.6, 0.2])
    } else {
        text(format!(
            "TONGUE WEIGHT {} ({:.0}-{:.0}% recommended)",
            result.status.display_name(),
            RECOMMENDED_MIN_PCT,
            RECOMMENDED_MAX_PCT
        ))
        .size(16)
        .color([0.8, 0.2, 0.2])
    };

    let warning: Element<'_, Message> = match result.warning() {
        Some(message) => column![
            Space::new().height(4),
            text(message).size(11).color([0.9, 0.5, 0.0]),
        ]
        .into(),
        None => Space::new().height(0).into(),
    };

    column![
        text("Calculation Results").size(14),
        Space::new().height(8),
        headline,
        warning,
        Space::new().height(12),
        text("Weights").size(12),
        text(format!("Total Trailer Weight: {:.0} lb", result.total_weight_lb)).size(11),
        text(format!("Tongue Weight: {:.0} lb", result.tongue_weight_lb)).size(11),
        text(format!("Tongue % of Total: {:.1}%", result.tongue_weight_pct)).size(11),
        Space::new().height(12),
        text("Moment Balance").size(12),
        text(format!("Total Moment: {:.0} in-lb", result.total_moment_inlb)).size(11),
        text(format!("Mean Axle Position: {:.1} in", result.axle_position_in)).size(11),
        text(format!("Axle Group Reaction: {:.0} lb", result.axle_reaction_lb)).size(11),
    ]
}
