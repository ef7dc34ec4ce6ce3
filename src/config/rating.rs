//! Rating engine configuration

use crate::error::{RatingError, Result};
use crate::rating::DEFAULT_SENSITIVITY_CONSTANT;
use serde::{Deserialize, Serialize};

/// Tunable parameters for the rating model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Higher values flatten the expected-score curve
    pub sensitivity_constant: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            sensitivity_constant: DEFAULT_SENSITIVITY_CONSTANT,
        }
    }
}

impl RatingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.sensitivity_constant.is_finite() || self.sensitivity_constant <= 0.0 {
            return Err(RatingError::InvalidSensitivity {
                value: self.sensitivity_constant,
            }
            .into());
        }

        Ok(())
    }
}
