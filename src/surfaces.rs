//! Capabilities the controller drives: the map, the entry form, the workout
//! list and user alerts, plus the events they emit.

use crate::render::{ListItem, MarkerPopup};
use crate::types::{Coords, WorkoutType};

/// Zoom used when creating the map and when recentering on a workout.
pub const MAP_ZOOM_LEVEL: u8 = 15;

/// Something that happened in one of the surfaces.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LocationAcquired(Coords),
    LocationFailed,
    MapClicked(Coords),
    TypeChanged(WorkoutType),
    FormSubmitted,
    ListItemClicked(String),
}

/// One-shot position lookup. `None` means the user refused or it failed.
pub trait LocationProvider {
    fn request_current_location(&mut self) -> Option<Coords>;
}

impl LocationProvider for Option<Coords> {
    fn request_current_location(&mut self) -> Option<Coords> {
        *self
    }
}

impl Event {
    /// Runs a provider and turns its answer into the matching event.
    pub fn from_location(provider: &mut impl LocationProvider) -> Self {
        provider
            .request_current_location()
            .map_or(Self::LocationFailed, Self::LocationAcquired)
    }
}

pub trait MapSurface {
    fn create_map(&mut self, center: Coords, zoom: u8);
    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup);
    fn recenter(&mut self, coords: Coords, zoom: u8);
}

/// Raw field contents, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            workout_type: WorkoutType::Running,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

pub trait FormSurface {
    fn values(&self) -> FormValues;
    fn show(&mut self);
    fn hide(&mut self);
    /// Empties every numeric field.
    fn clear(&mut self);
    /// Shows the cadence row for running, the elevation row for cycling.
    fn show_metric_field(&mut self, workout_type: WorkoutType);
}

pub trait ListSurface {
    fn append_item(&mut self, item: &ListItem);
}

pub trait AlertSurface {
    fn alert(&mut self, message: &str);
}

/// The UI collaborators, grouped so they can be handed over together.
pub struct Surfaces<M, F, L, A> {
    pub map: M,
    pub form: F,
    pub list: L,
    pub alerts: A,
}
