//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Competitor field is empty")]
    EmptyField,

    #[error("Invalid prior rating {rating} for competitor {competitor_id}")]
    InvalidRating { competitor_id: String, rating: f64 },

    #[error("Invalid sensitivity constant: {value}")]
    InvalidSensitivity { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid race input: {message}")]
    InputError { message: String },
}
