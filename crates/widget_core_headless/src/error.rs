use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure reported by a navigation pre-action. Blocks the pending transition.
#[error("{message}")]
pub struct PreActionError {
    /// Human-readable reason, suitable for a validation banner.
    pub message: String,
}

impl PreActionError {
    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected widget configuration.
pub enum WidgetConfigError {
    /// Counter lower bound exceeds the upper bound.
    #[error("counter range is inverted: min {min} > max {max}")]
    InvalidCounterRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}
