//! Strength-of-field rating model
//!
//! This module provides the closed-form model terms and the engine that
//! applies them to a full race field.

pub mod engine;
pub mod formula;

// Re-export commonly used types
pub use engine::{RatingEngine, DEFAULT_SENSITIVITY_CONSTANT};
