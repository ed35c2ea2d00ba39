//! Error kinds.
//!
//! [`TrackerError`] covers what can go wrong while handling user events. None
//! of them is fatal: the controller recovers locally and only reports them.
//! [`StorageError`] is a failure of the durable slot itself.

/// Recoverable failures of the tracking flow.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Could not get your position")]
    LocationDenied,

    #[error("Inputs have to be positive numbers!")]
    InvalidInput { field: &'static str },

    #[error("Stored workouts could not be read: {0}")]
    CorruptPersistedState(String),

    #[error("No map available to {0}")]
    MissingMapContext(&'static str),
}

impl TrackerError {
    /// Whether this error is shown to the user as an alert.
    pub const fn is_user_visible(&self) -> bool {
        matches!(self, Self::LocationDenied | Self::InvalidInput { .. })
    }
}

/// Failure reading or writing the durable key-value slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Encoding workouts failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_messages() {
        assert_eq!(
            TrackerError::LocationDenied.to_string(),
            "Could not get your position"
        );
        assert_eq!(
            TrackerError::InvalidInput { field: "distance" }.to_string(),
            "Inputs have to be positive numbers!"
        );
    }

    #[test]
    fn only_location_and_input_errors_alert() {
        assert!(TrackerError::LocationDenied.is_user_visible());
        assert!(TrackerError::InvalidInput { field: "cadence" }.is_user_visible());
        assert!(!TrackerError::CorruptPersistedState("eof".into()).is_user_visible());
        assert!(!TrackerError::MissingMapContext("recenter").is_user_visible());
    }
}
