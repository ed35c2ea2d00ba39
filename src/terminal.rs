//! Surfaces backed by the terminal, used by the `maptrack` binary.

use crate::render::{ListItem, MarkerPopup};
use crate::surfaces::{AlertSurface, FormSurface, FormValues, ListSurface, MapSurface};
use crate::types::{Coords, WorkoutType};
use crate::utils::maps_link;

/// Logs map activity; prints where the view ends up when recentered.
#[derive(Debug, Default)]
pub struct TerminalMap {
    view: Option<(Coords, u8)>,
    markers: usize,
}

impl TerminalMap {
    pub const fn view(&self) -> Option<(Coords, u8)> {
        self.view
    }

    pub const fn markers(&self) -> usize {
        self.markers
    }
}

impl MapSurface for TerminalMap {
    fn create_map(&mut self, center: Coords, zoom: u8) {
        tracing::info!(lat = center.lat, lng = center.lng, zoom, "map created");
        self.view = Some((center, zoom));
    }

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) {
        tracing::info!(
            lat = coords.lat,
            lng = coords.lng,
            class = %popup.class_name,
            "marker: {}",
            popup.label
        );
        self.markers += 1;
    }

    fn recenter(&mut self, coords: Coords, zoom: u8) {
        self.view = Some((coords, zoom));
        println!("{coords}\tzoom={zoom}\t{}", maps_link(coords));
    }
}

/// A form whose fields were filled from the command line.
#[derive(Debug, Default)]
pub struct PresetForm {
    values: FormValues,
    visible: bool,
    metric: Option<WorkoutType>,
}

impl PresetForm {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Replaces the field contents, as typing would.
    pub fn fill(&mut self, values: FormValues) {
        self.values = values;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn metric_field(&self) -> Option<WorkoutType> {
        self.metric
    }
}

impl FormSurface for PresetForm {
    fn values(&self) -> FormValues {
        self.values.clone()
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn clear(&mut self) {
        self.values = FormValues {
            workout_type: self.values.workout_type,
            ..FormValues::default()
        };
    }

    fn show_metric_field(&mut self, workout_type: WorkoutType) {
        self.values.workout_type = workout_type;
        self.metric = Some(workout_type);
    }
}

/// Prints each list entry on its own stdout line.
#[derive(Debug, Default)]
pub struct StdoutList {
    visible: bool,
    details: bool,
    printed: usize,
}

impl StdoutList {
    pub const fn new(details: bool) -> Self {
        Self {
            visible: true,
            details,
            printed: 0,
        }
    }

    /// Counts entries without printing them.
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            details: false,
            printed: 0,
        }
    }

    pub const fn printed(&self) -> usize {
        self.printed
    }
}

impl ListSurface for StdoutList {
    fn append_item(&mut self, item: &ListItem) {
        self.printed += 1;
        if !self.visible {
            return;
        }
        if self.details {
            println!("{}\t{}\t{}\t{item}", self.printed, item.id, item.workout_type);
        } else {
            println!("{item}");
        }
    }
}

#[derive(Debug, Default)]
pub struct StderrAlerts {
    raised: Vec<String>,
}

impl StderrAlerts {
    pub fn raised(&self) -> &[String] {
        &self.raised
    }
}

impl AlertSurface for StderrAlerts {
    fn alert(&mut self, message: &str) {
        eprintln!("alert: {message}");
        self.raised.push(message.to_string());
    }
}
