//! The only writer of the workout store.
//!
//! Every surface event goes through [`SyncController::handle`]. A valid form
//! submission builds a workout, appends it, places its marker, renders its
//! list entry and saves the store, in that order.

use crate::dlog;
use crate::error::{StorageError, TrackerError};
use crate::persistence::{KeyValueSlot, Persistence};
use crate::render::{ListItem, MarkerPopup};
use crate::store::WorkoutStore;
use crate::surfaces::{
    AlertSurface, Event, FormSurface, ListSurface, MAP_ZOOM_LEVEL, MapSurface, Surfaces,
};
use crate::types::{Coords, Workout, WorkoutType};
use crate::utils::{maps_link, parse_number};
use chrono::{DateTime, Utc};

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Where the "new workout" flow stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowState {
    Idle,
    /// A map click captured `location`; the form is open.
    AwaitingFormSubmit { location: Coords },
}

pub struct SyncController<K, M, F, L, A> {
    store: WorkoutStore,
    persistence: Persistence<K>,
    map: M,
    form: F,
    list: L,
    alerts: A,
    clock: Box<dyn Clock>,
    map_ready: bool,
    state: FlowState,
}

impl<K, M, F, L, A> SyncController<K, M, F, L, A>
where
    K: KeyValueSlot,
    M: MapSurface,
    F: FormSurface,
    L: ListSurface,
    A: AlertSurface,
{
    /// Loads persisted workouts and renders their list entries.
    ///
    /// Markers wait for [`Event::LocationAcquired`], which creates the map.
    pub fn start(persistence: Persistence<K>, surfaces: Surfaces<M, F, L, A>) -> Self {
        Self::start_with_clock(persistence, surfaces, SystemClock)
    }

    pub fn start_with_clock(
        persistence: Persistence<K>,
        surfaces: Surfaces<M, F, L, A>,
        clock: impl Clock + 'static,
    ) -> Self {
        let Surfaces {
            map,
            form,
            list,
            alerts,
        } = surfaces;

        let mut controller = Self {
            store: WorkoutStore::new(),
            persistence,
            map,
            form,
            list,
            alerts,
            clock: Box::new(clock),
            map_ready: false,
            state: FlowState::Idle,
        };
        controller.restore();
        controller
    }

    fn restore(&mut self) {
        let Some(workouts) = self.persistence.load() else {
            return;
        };
        tracing::info!(count = workouts.len(), "loaded stored workouts");

        self.store.replace_all(workouts);
        for w in &self.store {
            self.list.append_item(&ListItem::for_workout(w));
        }
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::LocationAcquired(here) => self.on_location_acquired(here),
            Event::LocationFailed => self.report(TrackerError::LocationDenied),
            Event::MapClicked(at) => self.on_map_clicked(at),
            Event::TypeChanged(ty) => self.form.show_metric_field(ty),
            Event::FormSubmitted => self.on_form_submitted(),
            Event::ListItemClicked(id) => self.on_list_item_clicked(&id),
        }
    }

    fn on_location_acquired(&mut self, here: Coords) {
        tracing::info!(lat = here.lat, lng = here.lng, link = %maps_link(here), "location acquired");

        self.map.create_map(here, MAP_ZOOM_LEVEL);
        self.map_ready = true;

        for w in &self.store {
            self.map
                .place_marker(w.coords(), &MarkerPopup::for_workout(w));
        }
        dlog!("map ready, markers placed count={}", self.store.len());
    }

    fn on_map_clicked(&mut self, at: Coords) {
        if !self.map_ready {
            self.report(TrackerError::MissingMapContext("capture a click"));
            return;
        }
        if let FlowState::AwaitingFormSubmit { location } = self.state {
            dlog!("overwriting pending location {location} with {at}");
        }
        self.state = FlowState::AwaitingFormSubmit { location: at };
        self.form.show();
    }

    fn on_form_submitted(&mut self) {
        let FlowState::AwaitingFormSubmit { location } = self.state else {
            self.report(TrackerError::MissingMapContext("place a workout"));
            return;
        };

        match self.build_workout(location) {
            Ok(workout) => self.record(workout),
            Err(e) => self.report(e),
        }
    }

    fn build_workout(&self, location: Coords) -> Result<Workout, TrackerError> {
        let values = self.form.values();
        let distance = parse_number(&values.distance);
        let duration = parse_number(&values.duration);
        let now = self.clock.now();

        match values.workout_type {
            WorkoutType::Running => {
                let cadence = parse_number(&values.cadence);
                check_fields(
                    &[
                        ("distance", distance),
                        ("duration", duration),
                        ("cadence", cadence),
                    ],
                    3,
                )?;
                Ok(Workout::running(location, distance, duration, cadence, now))
            }
            WorkoutType::Cycling => {
                let elevation = parse_number(&values.elevation);
                check_fields(
                    &[
                        ("distance", distance),
                        ("duration", duration),
                        ("elevation", elevation),
                    ],
                    2,
                )?;
                Ok(Workout::cycling(
                    location, distance, duration, elevation, now,
                ))
            }
        }
    }

    fn record(&mut self, workout: Workout) {
        tracing::info!(
            id = workout.id(),
            kind = %workout.workout_type(),
            lat = workout.coords().lat,
            lng = workout.coords().lng,
            "workout recorded"
        );
        self.store.append(workout);

        if let Some(w) = self.store.last() {
            self.map
                .place_marker(w.coords(), &MarkerPopup::for_workout(w));
            self.list.append_item(&ListItem::for_workout(w));
        }

        self.form.clear();
        self.form.hide();
        self.state = FlowState::Idle;

        // The store stays authoritative for the session even if this fails.
        if let Err(e) = self.persistence.save(&self.store) {
            tracing::error!(err = %e, "saving workouts failed");
        }
    }

    fn on_list_item_clicked(&mut self, id: &str) {
        let Some(coords) = self.store.find_by_id(id).map(Workout::coords) else {
            dlog!("list click on unknown workout id={id}");
            return;
        };
        if !self.map_ready {
            self.report(TrackerError::MissingMapContext("recenter on a workout"));
            return;
        }
        self.map.recenter(coords, MAP_ZOOM_LEVEL);
    }

    fn report(&mut self, err: TrackerError) {
        if err.is_user_visible() {
            tracing::warn!(err = %err, "alerting user");
            self.alerts.alert(&err.to_string());
        } else {
            dlog!("ignored: {err}");
        }
    }

    /// Removes persisted workouts and ends this controller. A fresh
    /// [`SyncController::start`] is the reload.
    pub fn reset(mut self) -> Result<(), StorageError> {
        self.persistence.clear()?;
        self.store.clear();
        tracing::info!("stored workouts cleared");
        Ok(())
    }

    pub const fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub const fn state(&self) -> FlowState {
        self.state
    }

    pub const fn map_ready(&self) -> bool {
        self.map_ready
    }

    pub const fn persistence(&self) -> &Persistence<K> {
        &self.persistence
    }

    pub const fn map(&self) -> &M {
        &self.map
    }

    pub const fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub const fn list(&self) -> &L {
        &self.list
    }

    pub const fn alerts(&self) -> &A {
        &self.alerts
    }
}

/// All fields must be finite; the first `positive` of them must also be > 0.
fn check_fields(fields: &[(&'static str, f64)], positive: usize) -> Result<(), TrackerError> {
    for (i, &(field, value)) in fields.iter().enumerate() {
        if !value.is_finite() || (i < positive && value <= 0.0) {
            tracing::warn!(field, value, "invalid workout input");
            return Err(TrackerError::InvalidInput { field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_fields_reports_first_bad_field() {
        assert!(check_fields(&[("distance", 1.0), ("duration", 2.0)], 2).is_ok());
        assert!(check_fields(&[("distance", 1.0), ("elevation", -40.0)], 1).is_ok());
        assert!(check_fields(&[("distance", 1.0), ("elevation", 0.0)], 1).is_ok());

        let err = check_fields(&[("distance", -1.0), ("duration", f64::NAN)], 2).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { field: "distance" }));

        let err = check_fields(&[("distance", 1.0), ("elevation", f64::NAN)], 1).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { field: "elevation" }));
    }
}
