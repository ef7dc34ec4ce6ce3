//! Utility functions for the rating engine

/// Round to a fixed number of decimal places, halves away from zero
///
/// Decimal halves such as 1.015 are not exactly representable and land just
/// below the half once scaled, so the scaled result is nudged up (or down for
/// negatives) when the next half step still does not exceed the input.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let mut rounded = (value * scale).round();

    if places > 0 {
        if value > 0.0 && (rounded + 0.5) / scale <= value {
            rounded += 1.0;
        } else if value < 0.0 && (rounded - 0.5) / scale >= value {
            rounded -= 1.0;
        }
    }

    rounded / scale
}

/// Kahan-Babuska compensated sum, independent of most ordering effects
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;

    for value in values {
        let total = sum + value;
        if f64::abs(sum) >= f64::abs(value) {
            compensation += (sum - total) + value;
        } else {
            compensation += (value - total) + sum;
        }
        sum = total;
    }

    sum + compensation
}

/// Check that a value can safely feed the exp/ln terms of the model
pub fn is_usable_rating(rating: f64) -> bool {
    rating.is_finite() && rating > 0.0
}
