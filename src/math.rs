//! Math utility functions.

use num_traits::{clamp, Float};

use crate::Component;

/// Clamp a unit component into `[0, 1]`. NaN is treated as `0.0`.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        clamp(value, 0.0, 1.0)
    }
}

/// Wrap a hue in degrees into `[0, 360)`. NaN is returned as is, since it
/// marks a missing hue.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Returns true if the value can be used as a length: finite and not negative.
pub fn is_valid_extent<T: Float>(value: T) -> bool {
    value.is_finite() && value >= T::zero()
}

/// Round a value to the given number of decimal digits. Only meant for
/// presentation.
pub fn round_to_digits(value: Component, digits: i32) -> Component {
    let mult = (10.0 as Component).powi(digits);
    (value * mult).round() / mult
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_and_zeroes_nan() {
        assert_eq!(normalize(-1.0), 0.0);
        assert_eq!(normalize(0.25), 0.25);
        assert_eq!(normalize(7.0), 1.0);
        assert_eq!(normalize(Component::NAN), 0.0);
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert!(normalize_hue(Component::NAN).is_nan());
    }

    #[test]
    fn rounding_for_display() {
        assert_eq!(round_to_digits(0.12345, 3), 0.123);
        assert_eq!(round_to_digits(0.9996, 3), 1.0);
        assert_eq!(round_to_digits(0.5, 3), 0.5);
    }

    #[test]
    fn extents() {
        assert!(is_valid_extent(0.0 as Component));
        assert!(is_valid_extent(300.0 as Component));
        assert!(!is_valid_extent(-1.0 as Component));
        assert!(!is_valid_extent(Component::INFINITY));
        assert!(!is_valid_extent(Component::NAN));
    }
}
