//! Error types for the library.
//!
//! Each concern gets its own error enum:
//!
//! - [`DateRangeError`] - bad arguments to `date_range`
//! - [`ScrollError`] - unknown easing names
//! - [`LoadError`] - script/image load failures
//! - [`HostError`] - missing browser globals

use thiserror::Error;

/// Date range argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    /// Period argument was empty.
    #[error("The argument `period` is Required.")]
    MissingPeriod,
    /// Period is not one of days/d, weeks/w, months/m.
    #[error("unknown period '{0}' (expected days, weeks, months, d, w or m)")]
    UnknownPeriod(String),
    /// Start or end could not be parsed with the period's format.
    #[error("invalid date '{value}' for format {format}")]
    InvalidDate { value: String, format: &'static str },
}

/// Scroll animation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// Easing name has no matching equation.
    #[error("unknown easing '{0}'")]
    UnknownEasing(String),
}

/// Resource loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Script element fired `error`.
    #[error("failed to load script: {src}")]
    Script { src: String },
    /// Image fired `error`; `event` is the failure event's type. The
    /// browser host keeps the event object itself, see `BrowserHost::fetch_image`.
    #[error("failed to load image {src}: {event}")]
    Image { src: String, event: String },
    /// The host could not start the load at all.
    #[error("{0}")]
    Host(#[from] HostError),
}

/// Browser environment errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Document not available")]
    NoDocument,
    #[error("Document body not available")]
    NoBody,
    #[error("Failed to create element")]
    ElementCreationFailed,
    #[error("Failed to register event listener")]
    ListenerRegistrationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_period_message() {
        assert_eq!(
            DateRangeError::MissingPeriod.to_string(),
            "The argument `period` is Required."
        );
    }

    #[test]
    fn test_load_error_from_host_error() {
        let err: LoadError = HostError::NoBody.into();
        assert_eq!(err, LoadError::Host(HostError::NoBody));
        assert_eq!(err.to_string(), "Document body not available");
    }

    #[test]
    fn test_listener_registration_failure_is_a_load_error() {
        let err: LoadError = HostError::ListenerRegistrationFailed.into();
        assert_eq!(err.to_string(), "Failed to register event listener");
    }
}
