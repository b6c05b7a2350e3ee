//! Error types for the task tracker.

/// Failure to load or validate a [`TrackerConfig`](crate::TrackerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config document is not valid JSON for the expected shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds a value the tracker cannot use.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Failure to hand a reminder to the host notification facility.
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    /// The delay does not fit the host timer.
    #[error("reminder delay of {seconds}s exceeds the host timer range")]
    DelayOutOfRange { seconds: u64 },

    /// The host refused the request.
    #[error("host rejected reminder: {0}")]
    Host(String),
}
