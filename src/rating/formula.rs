//! Closed-form pieces of the strength-of-field rating model
//!
//! Every function here is pure and operates on plain `f64` values, so the
//! engine can evaluate them in any order without shared state.

use crate::utils::{compensated_sum, round_to};

/// Derive the race constant from a sensitivity constant
pub fn rating_scale(sensitivity_constant: f64) -> f64 {
    round_to(sensitivity_constant / std::f64::consts::LN_2, 2)
}

/// Exponential weight of a single rating on the given scale
pub fn field_weight(rating: f64, rating_scale: f64) -> f64 {
    (-rating / rating_scale).exp()
}

/// Aggregate strength of a field from its per-competitor weights
///
/// Callers must ensure `weights` is non-empty.
pub fn strength_of_field(weights: &[f64], rating_scale: f64) -> f64 {
    let total = compensated_sum(weights.iter().copied());
    round_to(rating_scale * (weights.len() as f64 / total).ln(), 2)
}

/// Probability-like term of competitor `d` finishing ahead of `j`
pub fn pair_term(weight_d: f64, weight_j: f64) -> f64 {
    let ahead = (1.0 - weight_d) * weight_j;
    let behind = (1.0 - weight_j) * weight_d;
    ahead / (behind + ahead)
}

/// Expected score of one competitor against the whole field
///
/// `field` must include the competitor's own weight. The self pairing
/// always contributes exactly 0.5, which is removed after rounding.
pub fn expected_score(weight: f64, field: &[f64]) -> f64 {
    let raw = compensated_sum(field.iter().map(|other| pair_term(weight, *other)));
    round_to(raw, 2) - 0.5
}

/// Position-based correction applied before the delta
pub fn fudge_factor(competitor_count: usize, position: u32) -> f64 {
    ((competitor_count as f64 / 2.0) - position as f64) / 100.0
}

/// Signed rating change from actual against expected finish
pub fn rating_delta(
    competitor_count: usize,
    position: u32,
    expected_score: f64,
    fudge_factor: f64,
) -> f64 {
    let n = competitor_count as f64;
    let performance = n - position as f64 - expected_score - fudge_factor;
    round_to((performance * 200.0) / n, 2)
}

/// Finishing position implied by the expected score
pub fn expected_position(competitor_count: usize, expected_score: f64) -> f64 {
    round_to(competitor_count as f64 - expected_score, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_scale_default_sensitivity() {
        assert_eq!(rating_scale(1600.0), 2308.31);
    }

    #[test]
    fn test_self_pairing_is_half() {
        let weight = field_weight(1800.0, 2308.31);
        assert_eq!(pair_term(weight, weight), 0.5);
    }

    #[test]
    fn test_pair_terms_are_complementary() {
        let strong = field_weight(3000.0, 2308.31);
        let weak = field_weight(1200.0, 2308.31);

        let forward = pair_term(strong, weak);
        let backward = pair_term(weak, strong);

        assert!(forward > 0.5);
        assert!((forward + backward - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_field_expected_score() {
        let weight = field_weight(2000.0, 2308.31);
        let field = vec![weight; 4];

        // Three opponents at 0.5 each
        assert_eq!(expected_score(weight, &field), 1.5);
    }

    #[test]
    fn test_strength_of_equal_field_is_the_shared_rating() {
        let scale = 2308.31;
        let weights = vec![field_weight(2500.0, scale); 10];
        assert_eq!(strength_of_field(&weights, scale), 2500.0);
    }

    #[test]
    fn test_fudge_factor_sign() {
        assert_eq!(fudge_factor(28, 1), 0.13);
        assert_eq!(fudge_factor(28, 14), 0.0);
        assert_eq!(fudge_factor(28, 28), -0.14);
    }

    #[test]
    fn test_expected_position_rounding() {
        assert_eq!(expected_position(28, 24.49), 3.5);
        assert_eq!(expected_position(28, 6.97), 21.0);
    }
}
