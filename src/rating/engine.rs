//! Rating engine for a single race
//!
//! The engine owns one race's competitor set. Field aggregates are derived
//! eagerly at construction; `compute` is a pure pass that returns fresh
//! result records every time it is called.

use crate::config::RatingConfig;
use crate::error::{RatingError, Result};
use crate::rating::formula;
use crate::types::{CompetitorInput, CompetitorResult, FieldAggregate, RaceOutcome};
use crate::utils::is_usable_rating;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Default sensitivity constant for standard races
pub const DEFAULT_SENSITIVITY_CONSTANT: f64 = 1600.0;

/// Strength-of-field rating engine
#[derive(Debug, Clone)]
pub struct RatingEngine {
    competitors: Vec<CompetitorInput>,
    sensitivity_constant: f64,
    rating_scale: f64,
    /// One weight per competitor, in input order
    weights: Vec<f64>,
    /// `None` only for an empty field
    strength_of_field: Option<f64>,
}

impl RatingEngine {
    /// Create an engine for one race
    ///
    /// Rejects a non-positive sensitivity constant and any prior rating that
    /// is not a finite positive number. An empty field is accepted here and
    /// reported when aggregates or results are requested.
    pub fn new(competitors: Vec<CompetitorInput>, sensitivity_constant: f64) -> Result<Self> {
        if !sensitivity_constant.is_finite() || sensitivity_constant <= 0.0 {
            return Err(RatingError::InvalidSensitivity {
                value: sensitivity_constant,
            }
            .into());
        }

        if let Some(bad) = competitors
            .iter()
            .find(|competitor| !is_usable_rating(competitor.prior_rating))
        {
            return Err(RatingError::InvalidRating {
                competitor_id: bad.id.clone(),
                rating: bad.prior_rating,
            }
            .into());
        }

        let rating_scale = formula::rating_scale(sensitivity_constant);
        let weights: Vec<f64> = competitors
            .iter()
            .map(|competitor| formula::field_weight(competitor.prior_rating, rating_scale))
            .collect();

        let strength_of_field = if weights.is_empty() {
            None
        } else {
            Some(formula::strength_of_field(&weights, rating_scale))
        };

        Ok(Self {
            competitors,
            sensitivity_constant,
            rating_scale,
            weights,
            strength_of_field,
        })
    }

    /// Create an engine using the default sensitivity constant
    pub fn with_default_sensitivity(competitors: Vec<CompetitorInput>) -> Result<Self> {
        Self::new(competitors, DEFAULT_SENSITIVITY_CONSTANT)
    }

    /// Create an engine from a validated rating configuration
    pub fn from_config(competitors: Vec<CompetitorInput>, config: &RatingConfig) -> Result<Self> {
        config.validate()?;
        Self::new(competitors, config.sensitivity_constant)
    }

    pub fn competitors(&self) -> &[CompetitorInput] {
        &self.competitors
    }

    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }

    pub fn sensitivity_constant(&self) -> f64 {
        self.sensitivity_constant
    }

    /// Race constant derived from the sensitivity constant
    pub fn rating_scale(&self) -> f64 {
        self.rating_scale
    }

    /// Strength of field over the input ratings
    pub fn strength_of_field(&self) -> Result<f64> {
        self.strength_of_field
            .ok_or_else(|| RatingError::EmptyField.into())
    }

    pub fn field_aggregate(&self) -> Result<FieldAggregate> {
        Ok(FieldAggregate {
            rating_scale: self.rating_scale,
            strength_of_field: self.strength_of_field()?,
        })
    }

    /// Run the rating pass over the whole field
    ///
    /// Results come back in input order. Calling this repeatedly yields
    /// identical outcomes.
    pub fn compute(&self) -> Result<RaceOutcome> {
        let field = self.field_aggregate()?;
        let count = self.competitor_count();

        self.warn_on_suspect_positions();

        let results: Vec<CompetitorResult> = self
            .competitors
            .iter()
            .zip(&self.weights)
            .map(|(competitor, &weight)| {
                let fudge_factor = formula::fudge_factor(count, competitor.position);
                let expected_score = formula::expected_score(weight, &self.weights);
                let rating_delta = formula::rating_delta(
                    count,
                    competitor.position,
                    expected_score,
                    fudge_factor,
                );

                CompetitorResult {
                    id: competitor.id.clone(),
                    position: competitor.position,
                    prior_rating: competitor.prior_rating,
                    did_not_start: competitor.did_not_start,
                    field_weight: weight,
                    fudge_factor,
                    expected_score,
                    rating_delta,
                    new_rating: competitor.prior_rating + rating_delta,
                    expected_position: formula::expected_position(count, expected_score),
                }
            })
            .collect();

        debug!(
            "Computed {} results (scale {}, strength of field {})",
            results.len(),
            field.rating_scale,
            field.strength_of_field
        );

        Ok(RaceOutcome { results, field })
    }

    /// Positions are passed through as given; only flag the odd ones.
    fn warn_on_suspect_positions(&self) {
        let count = self.competitor_count();
        let mut seen = HashSet::new();

        for competitor in &self.competitors {
            if competitor.position == 0 || competitor.position as usize > count {
                warn!(
                    "Competitor {} has position {} outside 1..={}",
                    competitor.id, competitor.position, count
                );
            }
            if !seen.insert(competitor.position) {
                debug!(
                    "Competitor {} shares position {}",
                    competitor.id, competitor.position
                );
            }
        }
    }
}
