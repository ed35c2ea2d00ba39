use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A map position, stored as a `[lat, lng]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coords {
    type Err = String;

    /// Parses `"lat,lng"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG, got {s:?}"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|e| format!("bad latitude {lat:?}: {e}"))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|e| format!("bad longitude {lng:?}: {e}"))?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(format!("coordinates out of range: {lat},{lng}"));
        }
        Ok(Self { lat, lng })
    }
}

/// The workout discriminant, persisted as `"running"` / `"cycling"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(format!("unknown workout type {other:?}")),
        }
    }
}

/// Kind-specific payload. Flattened into the snapshot with a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// steps/min
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// meters, may be zero or negative
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

impl WorkoutKind {
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// One recorded exercise session.
///
/// Derived fields (`pace`/`speed`, `description`, `id`) are computed once by
/// [`Workout::running`] / [`Workout::cycling`]. Deserialized workouts keep
/// whatever derived values were persisted. There are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    date: DateTime<Utc>,
    coords: Coords,
    /// km
    distance: f64,
    /// min
    duration: f64,
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    /// Inputs are expected to be validated by the caller.
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let pace = duration / distance;
        Self::build(
            coords,
            distance,
            duration,
            date,
            WorkoutKind::Running { cadence, pace },
        )
    }

    /// Inputs are expected to be validated by the caller.
    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::build(
            coords,
            distance,
            duration,
            date,
            WorkoutKind::Cycling {
                elevation_gain,
                speed,
            },
        )
    }

    fn build(
        coords: Coords,
        distance: f64,
        duration: f64,
        date: DateTime<Utc>,
        kind: WorkoutKind,
    ) -> Self {
        Self {
            id: id_from_timestamp(date),
            description: describe(kind.workout_type(), date),
            date,
            coords,
            distance,
            duration,
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub const fn coords(&self) -> Coords {
        self.coords
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub const fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    pub const fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { pace, .. } => Some(pace),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub const fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed, .. } => Some(speed),
            WorkoutKind::Running { .. } => None,
        }
    }
}

/// Last 10 characters of the decimal millisecond timestamp.
fn id_from_timestamp(date: DateTime<Utc>) -> String {
    let ms = date.timestamp_millis().to_string();
    let start = ms.len().saturating_sub(10);
    ms[start..].to_string()
}

/// `"{Type} on {Month} {Day}"` in the local calendar.
fn describe(ty: WorkoutType, date: DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    let month = MONTHS[local.month0() as usize];
    format!("{} on {month} {}", ty.label(), local.day())
}
