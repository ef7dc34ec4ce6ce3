//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};

/// Unique identifier for competitors
pub type CompetitorId = String;

/// Pre-race record for one competitor, supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorInput {
    pub id: CompetitorId,
    /// Finishing position, 1 = winner. Not validated.
    pub position: u32,
    pub prior_rating: f64,
    /// Stored and carried through; the formula does not branch on it.
    #[serde(default)]
    pub did_not_start: bool,
}

impl CompetitorInput {
    pub fn new(id: impl Into<CompetitorId>, position: u32, prior_rating: f64) -> Self {
        Self {
            id: id.into(),
            position,
            prior_rating,
            did_not_start: false,
        }
    }
}

/// Post-race result for one competitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorResult {
    pub id: CompetitorId,
    pub position: u32,
    pub prior_rating: f64,
    pub did_not_start: bool,
    pub field_weight: f64,
    pub fudge_factor: f64,
    pub expected_score: f64,
    pub rating_delta: f64,
    pub new_rating: f64,
    pub expected_position: f64,
}

/// Field-level aggregates for a single race
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldAggregate {
    /// Race constant: sensitivity / ln 2, rounded to 2 decimals
    pub rating_scale: f64,
    pub strength_of_field: f64,
}

/// Everything produced by one compute pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceOutcome {
    /// Results in the same order as the engine's inputs
    pub results: Vec<CompetitorResult>,
    pub field: FieldAggregate,
}

impl RaceOutcome {
    /// Look up the result for a competitor by id
    pub fn result_for(&self, id: &str) -> Option<&CompetitorResult> {
        self.results.iter().find(|result| result.id == id)
    }
}
