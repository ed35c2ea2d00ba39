use crate::types::Workout;

/// Ordered collection of the session's workouts (insertion order).
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// First workout with this id, if any. Linear scan.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Discards current contents. Only used when loading from storage.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn last(&self) -> Option<&Workout> {
        self.workouts.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.workouts.iter()
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }
}

impl<'a> IntoIterator for &'a WorkoutStore {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coords;
    use chrono::{TimeZone, Utc};

    fn workout_at(ms: i64) -> Workout {
        let date = Utc.timestamp_millis_opt(ms).unwrap();
        Workout::running(Coords::new(1.0, 2.0), 5.0, 25.0, 170.0, date)
    }

    #[test]
    fn find_by_id_returns_each_appended_workout() {
        let mut store = WorkoutStore::new();
        let ws: Vec<_> = (0..5)
            .map(|i| workout_at(1_700_000_000_000 + i * 1000))
            .collect();
        for w in &ws {
            store.append(w.clone());
        }

        assert_eq!(store.len(), 5);
        for w in &ws {
            assert_eq!(store.find_by_id(w.id()), Some(w));
        }
        assert!(store.find_by_id("nope").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first() {
        let mut store = WorkoutStore::new();
        let a = workout_at(1_700_000_000_000);
        let b = Workout::cycling(Coords::new(3.0, 4.0), 20.0, 60.0, 0.0, a.date());
        assert_eq!(a.id(), b.id());
        store.append(a.clone());
        store.append(b);

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(a.id()), Some(&a));
    }

    #[test]
    fn replace_all_and_clear() {
        let mut store = WorkoutStore::new();
        store.append(workout_at(1));
        store.replace_all(vec![workout_at(2), workout_at(3)]);
        let ids: Vec<_> = store.iter().map(Workout::id).collect();
        assert_eq!(ids, ["2", "3"]);

        store.clear();
        assert!(store.is_empty());
    }
}
