//! Shared race fields for integration testing

use race_rating::CompetitorInput;

/// (prior rating, finishing position) for the 28-driver reference race.
/// Drivers 22 and 23 share position 22; nobody finished 23rd.
const REFERENCE_FIELD: [(f64, u32); 28] = [
    (7526.0, 1),
    (5982.0, 2),
    (5463.0, 3),
    (4279.0, 4),
    (4137.0, 5),
    (4044.0, 6),
    (3891.0, 7),
    (3612.0, 8),
    (3147.0, 9),
    (2823.0, 10),
    (2715.0, 11),
    (2603.0, 12),
    (2512.0, 13),
    (2352.0, 14),
    (2227.0, 15),
    (2195.0, 16),
    (2166.0, 17),
    (2089.0, 18),
    (1773.0, 19),
    (1772.0, 20),
    (1752.0, 21),
    (1748.0, 22),
    (1705.0, 22),
    (1662.0, 24),
    (1622.0, 25),
    (1537.0, 26),
    (1464.0, 27),
    (1203.0, 28),
];

/// New rating for each reference driver after the race, in field order
pub const REFERENCE_NEW_RATINGS: [f64; 28] = [
    7543.0, 6006.93, 5487.5, 4315.57, 4169.21, 4070.93, 3913.93, 3633.79, 3172.5, 2849.71,
    2737.5, 2621.5, 2526.0, 2363.57, 2235.21, 2197.14, 2161.93, 2080.21, 1767.43, 1759.36,
    1733.0, 1722.0, 1680.5, 1624.79, 1579.14, 1490.07, 1412.57, 1154.21,
];

/// Driver ids are `driver_1` through `driver_28`
pub fn driver_id(index: usize) -> String {
    format!("driver_{}", index + 1)
}

/// The reference race field, in finishing order
pub fn reference_field() -> Vec<CompetitorInput> {
    REFERENCE_FIELD
        .iter()
        .enumerate()
        .map(|(index, &(rating, position))| {
            CompetitorInput::new(driver_id(index), position, rating)
        })
        .collect()
}

/// A field of `size` drivers whose ratings strictly decrease with position
pub fn monotonic_field(size: usize, top_rating: f64, step: f64) -> Vec<CompetitorInput> {
    (0..size)
        .map(|index| {
            CompetitorInput::new(
                driver_id(index),
                index as u32 + 1,
                top_rating - step * index as f64,
            )
        })
        .collect()
}
