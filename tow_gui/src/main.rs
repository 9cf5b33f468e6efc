//! # Towcheck GUI Application
//!
//! Graphical interface for the trailer tongue weight calculator. Built with
//! the Iced framework: a configuration sidebar (loads and axles), a results
//! panel with the range check and a layout diagram, and a status bar.
//!
//! All text fields hold raw strings; parsing and validation happen when the
//! operator presses Calculate, and any problem is shown in the results panel
//! instead of a result.

use iced::widget::{column, row};
use iced::{Element, Length, Theme};
use uuid::Uuid;

use tow_core::calculations::tongue::{calculate, Axle, TongueResult, TrailerInput, TrailerLoad};

mod ui;

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1080.0, 720.0))
        .run()
}

/// One editable row of the load table
#[derive(Debug, Clone)]
pub struct LoadRow {
    pub id: Uuid,
    pub weight_lb: String,
    pub distance_in: String,
}

impl LoadRow {
    fn new(weight_lb: &str, distance_in: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight_lb: weight_lb.to_string(),
            distance_in: distance_in.to_string(),
        }
    }
}

/// One editable row of the axle table
#[derive(Debug, Clone)]
pub struct AxleRow {
    pub id: Uuid,
    pub distance_in: String,
}

impl AxleRow {
    fn new(distance_in: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            distance_in: distance_in.to_string(),
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    TrailerLabelChanged(String),
    LoadWeightChanged(Uuid, String),
    LoadDistanceChanged(Uuid, String),
    AddLoad,
    RemoveLoad(Uuid),
    AxleDistanceChanged(Uuid, String),
    AddAxle,
    RemoveAxle(Uuid),
    Calculate,
    ToggleSettingsMenu,
    ToggleDarkMode,
}

/// Application state
pub struct App {
    pub trailer_label: String,
    pub load_table: Vec<LoadRow>,
    pub axle_table: Vec<AxleRow>,

    /// Configuration of the last successful calculation (drives the diagram)
    pub calc_input: Option<TrailerInput>,
    pub result: Option<TongueResult>,
    pub error_message: Option<String>,

    pub status: String,
    pub dark_mode: bool,
    pub settings_menu_open: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            trailer_label: "TR-1".to_string(),
            load_table: vec![LoadRow::new("2000", "100")],
            axle_table: vec![AxleRow::new("180"), AxleRow::new("228")],
            calc_input: None,
            result: None,
            error_message: None,
            status: "Ready".to_string(),
            dark_mode: false,
            settings_menu_open: false,
        }
    }
}

impl App {
    fn title(&self) -> String {
        format!("Towcheck - {}", self.trailer_label)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::TrailerLabelChanged(label) => {
                self.trailer_label = label;
            }
            Message::LoadWeightChanged(id, value) => {
                if let Some(load) = self.load_table.iter_mut().find(|l| l.id == id) {
                    load.weight_lb = value;
                }
            }
            Message::LoadDistanceChanged(id, value) => {
                if let Some(load) = self.load_table.iter_mut().find(|l| l.id == id) {
                    load.distance_in = value;
                }
            }
            Message::AddLoad => {
                self.load_table.push(LoadRow::new("2000", "100"));
            }
            Message::RemoveLoad(id) => {
                if self.load_table.len() > 1 {
                    self.load_table.retain(|l| l.id != id);
                }
            }
            Message::AxleDistanceChanged(id, value) => {
                if let Some(axle) = self.axle_table.iter_mut().find(|a| a.id == id) {
                    axle.distance_in = value;
                }
            }
            Message::AddAxle => {
                // Follow the existing spacing pattern: 48 in behind the last axle
                let next = self
                    .axle_table
                    .last()
                    .and_then(|a| a.distance_in.trim().parse::<f64>().ok())
                    .map(|d| format!("{:.0}", d + 48.0))
                    .unwrap_or_else(|| "180".to_string());
                self.axle_table.push(AxleRow::new(&next));
            }
            Message::RemoveAxle(id) => {
                if self.axle_table.len() > 1 {
                    self.axle_table.retain(|a| a.id != id);
                }
            }
            Message::Calculate => {
                self.run_calculation();
            }
            Message::ToggleSettingsMenu => {
                self.settings_menu_open = !self.settings_menu_open;
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                self.settings_menu_open = false;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column![
            ui::toolbar::view_header(&self.trailer_label, self.settings_menu_open),
        ]
        .spacing(4)
        .padding(8);

        if self.settings_menu_open {
            content = content.push(ui::toolbar::view_settings_menu(self.dark_mode));
        }

        let panels = row![
            ui::input_panel::view_input_panel(self, 0.35),
            ui::results_panel::view_results_panel(self, 0.35),
        ]
        .spacing(8)
        .height(Length::Fill);

        content
            .push(panels)
            .push(ui::status_bar::view_status_bar(
                self.load_table.len(),
                self.axle_table.len(),
                &self.status,
            ))
            .into()
    }

    /// Parse the edit buffers, run the engine, and record the outcome
    fn run_calculation(&mut self) {
        match self.parse_input() {
            Ok(input) => match calculate(&input) {
                Ok(result) => {
                    self.status = format!(
                        "{}: tongue weight {:.0} lb ({:.1}%) - {}",
                        input.label,
                        result.tongue_weight_lb,
                        result.tongue_weight_pct,
                        result.status.display_name()
                    );
                    self.calc_input = Some(input);
                    self.result = Some(result);
                    self.error_message = None;
                }
                Err(e) => {
                    self.status = "Calculation failed".to_string();
                    self.calc_input = None;
                    self.result = None;
                    self.error_message = Some(e.to_string());
                }
            },
            Err(message) => {
                self.status = "Check the configuration inputs".to_string();
                self.calc_input = None;
                self.result = None;
                self.error_message = Some(message);
            }
        }
    }

    /// Build a TrailerInput from the raw edit buffers.
    ///
    /// Returns a user-facing message naming the first offending field.
    fn parse_input(&self) -> Result<TrailerInput, String> {
        let mut loads = Vec::with_capacity(self.load_table.len());
        for (i, row) in self.load_table.iter().enumerate() {
            let weight_lb = parse_field(&row.weight_lb, &format!("Load {} weight", i + 1))?;
            let distance_in = parse_field(&row.distance_in, &format!("Load {} distance", i + 1))?;
            loads.push(TrailerLoad::new(weight_lb, distance_in));
        }

        let mut axles = Vec::with_capacity(self.axle_table.len());
        for (i, row) in self.axle_table.iter().enumerate() {
            let distance_in = parse_field(&row.distance_in, &format!("Axle {} position", i + 1))?;
            axles.push(Axle::new(distance_in));
        }

        Ok(TrailerInput {
            label: self.trailer_label.trim().to_string(),
            loads,
            axles,
        })
    }
}

/// Parse a numeric text field, naming the field in the error message
fn parse_field(value: &str, field: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is empty", field));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("{} is not a number: '{}'", field, trimmed))
}
