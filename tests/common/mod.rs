//! Recording fakes for the controller's surfaces.

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone, Utc};
use maptrack::controller::{Clock, SyncController};
use maptrack::persistence::{KeyValueSlot, Persistence};
use maptrack::render::{ListItem, MarkerPopup};
use maptrack::surfaces::{
    AlertSurface, FormSurface, FormValues, ListSurface, MapSurface, Surfaces,
};
use maptrack::types::{Coords, WorkoutType};
use std::cell::Cell;

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub created: Option<(Coords, u8)>,
    pub markers: Vec<(Coords, MarkerPopup)>,
    pub recentered: Vec<(Coords, u8)>,
}

impl MapSurface for RecordingMap {
    fn create_map(&mut self, center: Coords, zoom: u8) {
        self.created = Some((center, zoom));
    }

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) {
        self.markers.push((coords, popup.clone()));
    }

    fn recenter(&mut self, coords: Coords, zoom: u8) {
        self.recentered.push((coords, zoom));
    }
}

#[derive(Debug, Default)]
pub struct FakeForm {
    pub values: FormValues,
    pub visible: bool,
    pub cleared: usize,
    pub metric: Option<WorkoutType>,
}

impl FakeForm {
    pub fn type_in(
        &mut self,
        workout_type: WorkoutType,
        distance: &str,
        duration: &str,
        metric: &str,
    ) {
        self.values = FormValues {
            workout_type,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: String::new(),
        };
        match workout_type {
            WorkoutType::Running => self.values.cadence = metric.to_string(),
            WorkoutType::Cycling => self.values.elevation = metric.to_string(),
        }
    }
}

impl FormSurface for FakeForm {
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
        self.cleared += 1;
        self.values = FormValues {
            workout_type: self.values.workout_type,
            ..FormValues::default()
        };
    }

    fn show_metric_field(&mut self, workout_type: WorkoutType) {
        self.metric = Some(workout_type);
    }
}

#[derive(Debug, Default)]
pub struct RecordingList {
    pub items: Vec<ListItem>,
}

impl ListSurface for RecordingList {
    fn append_item(&mut self, item: &ListItem) {
        self.items.push(item.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingAlerts {
    pub messages: Vec<String>,
}

impl AlertSurface for RecordingAlerts {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Each call returns a time one second after the previous one.
pub struct SteppingClock {
    next_ms: Cell<i64>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next_ms: Cell::new(start.timestamp_millis()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = self.next_ms.get();
        self.next_ms.set(ms + 1000);
        Utc.timestamp_millis_opt(ms).unwrap()
    }
}

pub type TestController<K> =
    SyncController<K, RecordingMap, FakeForm, RecordingList, RecordingAlerts>;

/// Noon on 2024-08-31, local time.
pub fn aug_31() -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(2024, 8, 31, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn start<K: KeyValueSlot>(slot: K) -> TestController<K> {
    SyncController::start_with_clock(
        Persistence::new(slot),
        Surfaces {
            map: RecordingMap::default(),
            form: FakeForm::default(),
            list: RecordingList::default(),
            alerts: RecordingAlerts::default(),
        },
        SteppingClock::starting_at(aug_31()),
    )
}
