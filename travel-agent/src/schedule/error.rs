//! Schedule loading error types.

use std::path::PathBuf;

use crate::domain::TimeError;

/// Errors raised while loading a schedule.
///
/// These are load-time problems with the data itself; nothing here is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Schedule file could not be read
    #[error("failed to read schedule {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schedule JSON is malformed or a required column is missing
    #[error("schedule parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A flight's day list is not a bracketed list of weekday names
    #[error("flight {flight}: malformed day list {value:?}")]
    MalformedDays { flight: String, value: String },

    /// A flight's departure or arrival time is not a time of day
    #[error("flight {flight}: bad time {value:?}: {source}")]
    InvalidTime {
        flight: String,
        value: String,
        #[source]
        source: TimeError,
    },

    /// The same city appears twice in the cities table
    #[error("duplicate city: {0}")]
    DuplicateCity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScheduleError::MalformedDays {
            flight: "EK2".into(),
            value: "mon, tue".into(),
        };
        assert_eq!(err.to_string(), "flight EK2: malformed day list \"mon, tue\"");

        let err = ScheduleError::DuplicateCity("Cairo".into());
        assert_eq!(err.to_string(), "duplicate city: Cairo");
    }
}
