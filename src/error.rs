//! Unified error hierarchy for FitTrack
//!
//! Domain errors come from the metrics calculator, dispatch errors from
//! turning raw tracker packages into samples. Both roll up into
//! [`FitTrackError`] for the batch and CLI layers.

use thiserror::Error;

/// Top-level error type for all FitTrack operations
#[derive(Debug, Error)]
pub enum FitTrackError {
    /// Physically invalid sensor input
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Package could not be mapped to a workout
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV package file errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Invalid physical input rejected by the calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Duration must be strictly positive
    #[error("duration must be positive, got {duration_hours} h")]
    NonPositiveDuration { duration_hours: f64 },

    /// Height must be strictly positive for sports walking
    #[error("height must be positive, got {height_cm} cm")]
    NonPositiveHeight { height_cm: f64 },
}

/// Errors raised while reading a tracker package
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Workout code outside the known set
    #[error("unknown workout code: {code}")]
    UnknownVariant { code: String },

    /// Wrong number of positional values for the workout code
    #[error("{code} expects {expected} values, got {actual}")]
    Arity {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Positional value is not acceptable for its field
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f64 },

    /// Positional value is not a number at all
    #[error("not a number: {raw:?}")]
    InvalidNumber { raw: String },
}

/// Result type alias for FitTrack operations
pub type Result<T> = std::result::Result<T, FitTrackError>;

impl FitTrackError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitTrackError::Domain(_) | FitTrackError::Dispatch(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message shown next to a rejected package, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            FitTrackError::Domain(err) => err.to_string(),
            FitTrackError::Dispatch(err) => err.to_string(),
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents operation but system can continue
    Error,
    /// Bad input for a single package
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FitTrackError::Domain(DomainError::NonPositiveDuration {
            duration_hours: 0.0,
        });
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = FitTrackError::Configuration("bad".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_user_messages() {
        let err = FitTrackError::Dispatch(DispatchError::UnknownVariant {
            code: "BIK".to_string(),
        });
        assert_eq!(err.to_string(), "Dispatch error: unknown workout code: BIK");
        assert_eq!(err.user_message(), "unknown workout code: BIK");

        let err = FitTrackError::Dispatch(DispatchError::Arity {
            code: "RUN".to_string(),
            expected: 3,
            actual: 2,
        });
        assert_eq!(err.user_message(), "RUN expects 3 values, got 2");

        let err = FitTrackError::Serialization("broken".to_string());
        assert_eq!(err.user_message(), "Serialization error: broken");
    }

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::NonPositiveHeight { height_cm: -5.0 };
        assert_eq!(err.to_string(), "height must be positive, got -5 cm");
    }
}
