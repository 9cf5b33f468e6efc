//! Canvas drawing utilities for the trailer layout diagram
//!
//! Renders the trailer frame line with the hitch at the origin, one marker
//! per load and axle, and a tongue weight annotation pointing at the hitch.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use tow_core::calculations::tongue::{Axle, TongueResult, TrailerInput, TrailerLoad};

use crate::Message;

/// Extra frame length drawn past the furthest load/axle (in)
const FRAME_OVERHANG_IN: f64 = 20.0;

/// Data needed to draw the layout diagram
pub struct TrailerDiagramData {
    pub loads: Vec<TrailerLoad>,
    pub axles: Vec<Axle>,
    pub tongue_weight_lb: f64,
    pub tongue_weight_pct: f64,
}

impl TrailerDiagramData {
    pub fn from_calc(input: &TrailerInput, result: &TongueResult) -> Self {
        Self {
            loads: input.loads.clone(),
            axles: input.axles.clone(),
            tongue_weight_lb: result.tongue_weight_lb,
            tongue_weight_pct: result.tongue_weight_pct,
        }
    }

    /// Drawn frame length (in): furthest load or axle plus an overhang
    pub fn frame_length_in(&self) -> f64 {
        let furthest_axle = self
            .axles
            .iter()
            .map(|a| a.distance_in)
            .fold(0.0f64, |a, b| a.max(b));
        let furthest_load = self
            .loads
            .iter()
            .map(|l| l.distance_in)
            .fold(0.0f64, |a, b| a.max(b));
        furthest_axle.max(furthest_load) + FRAME_OVERHANG_IN
    }

    /// Anchor position for the tongue weight annotation: halfway between
    /// the hitch and the nearest axle
    fn annotation_position_in(&self) -> f64 {
        self.axles
            .iter()
            .map(|a| a.distance_in)
            .fold(f64::INFINITY, |a, b| a.min(b))
            / 2.0
    }
}

/// Canvas program for drawing the trailer layout
pub struct TrailerDiagram {
    data: TrailerDiagramData,
}

impl TrailerDiagram {
    pub fn new(data: TrailerDiagramData) -> Self {
        Self { data }
    }

    /// Map a distance from the hitch (in) to a canvas x coordinate.
    ///
    /// The drawn axis runs from slightly before the hitch to the end of the
    /// frame so the hitch marker is not clipped at the edge.
    fn x_at(&self, distance_in: f64, x: f32, width: f32) -> f32 {
        let frame_length = self.data.frame_length_in();
        let axis_start = -10.0;
        let span = frame_length - axis_start;
        x + ((distance_in - axis_start) / span) as f32 * width
    }

    fn draw_frame_line(&self, frame: &mut Frame, x: f32, width: f32, baseline_y: f32, color: Color) {
        let start = self.x_at(0.0, x, width);
        let end = self.x_at(self.data.frame_length_in(), x, width);
        let line = Path::line(Point::new(start, baseline_y), Point::new(end, baseline_y));
        frame.stroke(&line, Stroke::default().with_color(color).with_width(2.0));
    }

    fn draw_hitch(&self, frame: &mut Frame, x: f32, width: f32, baseline_y: f32, color: Color) {
        let hitch_x = self.x_at(0.0, x, width);
        let marker = Path::circle(Point::new(hitch_x, baseline_y), 4.0);
        frame.fill(&marker, color);

        let label = Text {
            content: "Hitch".to_string(),
            position: Point::new(hitch_x, baseline_y - 32.0),
            color,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(label);

        let position_label = Text {
            content: "(0 in)".to_string(),
            position: Point::new(hitch_x, baseline_y - 21.0),
            color,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(position_label);
    }

    fn draw_loads(&self, frame: &mut Frame, x: f32, width: f32, baseline_y: f32, color: Color) {
        for (i, load) in self.data.loads.iter().enumerate() {
            let load_x = self.x_at(load.distance_in, x, width);
            let marker = Path::circle(Point::new(load_x, baseline_y), 4.0);
            frame.fill(&marker, color);

            let name = Text {
                content: format!("Load {}", i + 1),
                position: Point::new(load_x, baseline_y - 32.0),
                color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(name);

            let weight = Text {
                content: format!("({:.0} lb)", load.weight_lb),
                position: Point::new(load_x, baseline_y - 21.0),
                color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(weight);
        }
    }

    fn draw_axles(&self, frame: &mut Frame, x: f32, width: f32, baseline_y: f32, color: Color) {
        let half = 4.0;
        for (i, axle) in self.data.axles.iter().enumerate() {
            let axle_x = self.x_at(axle.distance_in, x, width);
            let marker = Path::rectangle(
                Point::new(axle_x - half, baseline_y - half),
                Size::new(half * 2.0, half * 2.0),
            );
            frame.fill(&marker, color);

            let name = Text {
                content: format!("Axle {}", i + 1),
                position: Point::new(axle_x, baseline_y + 10.0),
                color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(name);

            let position = Text {
                content: format!("({:.0} in)", axle.distance_in),
                position: Point::new(axle_x, baseline_y + 21.0),
                color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(position);
        }
    }

    /// Draw the tongue weight annotation box with an arrow to the hitch
    fn draw_annotation(
        &self,
        frame: &mut Frame,
        x: f32,
        width: f32,
        baseline_y: f32,
        accent: Color,
        fill: Color,
    ) {
        let anchor_x = self.x_at(self.data.annotation_position_in(), x, width);
        let box_width = 130.0;
        let box_height = 30.0;
        let box_top = baseline_y - 95.0;
        let top_left = Point::new(anchor_x - box_width / 2.0, box_top);

        let box_path = Path::rectangle(top_left, Size::new(box_width, box_height));
        frame.fill(&box_path, fill);
        frame.stroke(&box_path, Stroke::default().with_color(accent).with_width(1.0));

        let title = Text {
            content: "Tongue Weight:".to_string(),
            position: Point::new(anchor_x, box_top + 4.0),
            color: accent,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(title);

        let value = Text {
            content: format!(
                "{:.0} lb ({:.1}%)",
                self.data.tongue_weight_lb, self.data.tongue_weight_pct
            ),
            position: Point::new(anchor_x, box_top + 15.0),
            color: accent,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(value);

        // Arrow from the box to the hitch marker
        let hitch_x = self.x_at(0.0, x, width);
        let arrow_start = Point::new(anchor_x - box_width / 2.0, box_top + box_height);
        let arrow_end = Point::new(hitch_x + 3.0, baseline_y - 6.0);
        let arrow = Path::line(arrow_start, arrow_end);
        frame.stroke(&arrow, Stroke::default().with_color(accent).with_width(1.5));

        // Arrow head
        let head = Path::new(|builder| {
            builder.move_to(arrow_end);
            builder.line_to(Point::new(arrow_end.x + 6.0, arrow_end.y - 3.0));
            builder.move_to(arrow_end);
            builder.line_to(Point::new(arrow_end.x + 2.0, arrow_end.y - 7.0));
        });
        frame.stroke(&head, Stroke::default().with_color(accent).with_width(1.5));
    }
}

impl canvas::Program<Message> for TrailerDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let margin = 20.0;
        let plot_width = bounds.width - 2.0 * margin;
        let baseline_y = bounds.height * 0.6;

        // Colors
        let frame_color = Color::from_rgb(0.3, 0.3, 0.3);
        let hitch_color = Color::from_rgb(0.8, 0.2, 0.2);
        let load_color = Color::from_rgb(0.2, 0.4, 0.8);
        let axle_color = Color::from_rgb(0.2, 0.6, 0.3);
        let annotation_fill = Color::from_rgba(1.0, 1.0, 0.8, 0.9);

        self.draw_frame_line(&mut frame, margin, plot_width, baseline_y, frame_color);
        self.draw_loads(&mut frame, margin, plot_width, baseline_y, load_color);
        self.draw_axles(&mut frame, margin, plot_width, baseline_y, axle_color);
        self.draw_hitch(&mut frame, margin, plot_width, baseline_y, hitch_color);
        self.draw_annotation(
            &mut frame,
            margin,
            plot_width,
            baseline_y,
            hitch_color,
            annotation_fill,
        );

        vec![frame.into_geometry()]
    }
}
