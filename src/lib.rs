//! Race Rating - post-race rating adjustments for a field of competitors
//!
//! This crate computes expected scores, rating deltas and new ratings for
//! every competitor in a race using a logistic strength-of-field model.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::RatingEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
