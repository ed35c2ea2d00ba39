use crate::types::{Workout, WorkoutKind, WorkoutType};
use std::fmt;

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub label: String,
    pub class_name: String,
}

impl MarkerPopup {
    pub fn for_workout(w: &Workout) -> Self {
        let ty = w.workout_type();
        Self {
            label: format!("{} {}", ty.icon(), w.description()),
            class_name: format!("{ty}-popup"),
        }
    }
}

/// One value row of a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Detail {
    fn new(icon: &'static str, value: impl ToString, unit: &'static str) -> Self {
        Self {
            icon,
            value: value.to_string(),
            unit,
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.icon, self.value, self.unit)
    }
}

/// A workout laid out for the list: its own fields and derived ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: String,
    pub workout_type: WorkoutType,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListItem {
    pub fn for_workout(w: &Workout) -> Self {
        let ty = w.workout_type();
        let mut details = vec![
            Detail::new(ty.icon(), w.distance(), "km"),
            Detail::new("⏱", w.duration(), "min"),
        ];
        match *w.kind() {
            WorkoutKind::Running { cadence, pace } => {
                details.push(Detail::new("⚡️", format!("{pace:.1}"), "min/km"));
                details.push(Detail::new("🦶🏼", cadence, "spm"));
            }
            WorkoutKind::Cycling {
                elevation_gain,
                speed,
            } => {
                details.push(Detail::new("⚡️", format!("{speed:.1}"), "km/h"));
                details.push(Detail::new("⛰", elevation_gain, "m"));
            }
        }

        Self {
            id: w.id().to_string(),
            workout_type: ty,
            title: w.description().to_string(),
            details,
        }
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for d in &self.details {
            write!(f, "  {d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coords;
    use chrono::{Local, TimeZone, Utc};

    fn aug_31() -> chrono::DateTime<Utc> {
        Local
            .with_ymd_and_hms(2024, 8, 31, 8, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn running_item() {
        let w = Workout::running(Coords::new(51.5, -0.1), 5.2, 24.0, 178.0, aug_31());
        let item = ListItem::for_workout(&w);

        assert_eq!(item.id, w.id());
        assert_eq!(item.title, "Running on August 31");
        let values: Vec<_> = item.details.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, ["5.2", "24", "4.6", "178"]);
        assert_eq!(item.details[2].unit, "min/km");
        assert_eq!(item.details[3].unit, "spm");
        assert_eq!(
            item.to_string(),
            "Running on August 31  🏃‍♂️ 5.2 km  ⏱ 24 min  ⚡️ 4.6 min/km  🦶🏼 178 spm"
        );
    }

    #[test]
    fn cycling_item() {
        let w = Workout::cycling(Coords::new(51.5, -0.1), 27.0, 95.0, 523.0, aug_31());
        let item = ListItem::for_workout(&w);

        let values: Vec<_> = item.details.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, ["27", "95", "17.1", "523"]);
        assert_eq!(item.details[2].unit, "km/h");
        assert_eq!(item.details[3].unit, "m");
    }

    #[test]
    fn popup_label_and_class() {
        let w = Workout::cycling(Coords::new(0.0, 0.0), 10.0, 30.0, 0.0, aug_31());
        let popup = MarkerPopup::for_workout(&w);
        assert_eq!(popup.label, "🚴‍♀️ Cycling on August 31");
        assert_eq!(popup.class_name, "cycling-popup");
    }
}
