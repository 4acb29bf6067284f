//! Extrusion height rule

use bv_data::feature::{attrs, Feature};

/// Height of one floor, in the renderer's vertical unit
pub const FLOOR_HEIGHT: f64 = 3.0;

/// Extrusion height for a building: floors above ground times floor height.
///
/// Pure and total; a missing or non-numeric floor count extrudes to zero.
pub fn elevation(feature: &Feature) -> f64 {
    feature
        .number(attrs::FLOORS_ABOVE_GROUND)
        .unwrap_or(0.0)
        * FLOOR_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_floor_count_by_floor_height() {
        let feature = Feature::new().with_attribute(attrs::FLOORS_ABOVE_GROUND, 5.0);
        assert_eq!(elevation(&feature), 15.0);

        let single = Feature::new().with_attribute(attrs::FLOORS_ABOVE_GROUND, 1.0);
        assert_eq!(elevation(&single), FLOOR_HEIGHT);
    }

    #[test]
    fn numeric_text_counts() {
        let feature = Feature::new().with_attribute(attrs::FLOORS_ABOVE_GROUND, "4");
        assert_eq!(elevation(&feature), 12.0);
    }

    #[test]
    fn missing_or_non_numeric_counts_extrude_to_zero() {
        assert_eq!(elevation(&Feature::new()), 0.0);

        let feature = Feature::new().with_attribute(attrs::FLOORS_ABOVE_GROUND, "several");
        assert_eq!(elevation(&feature), 0.0);
    }

    #[test]
    fn zero_floors_extrude_to_zero() {
        let feature = Feature::new().with_attribute(attrs::FLOORS_ABOVE_GROUND, 0.0);
        assert_eq!(elevation(&feature), 0.0);
    }
}
