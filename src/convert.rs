//! Conversions between the RGB and HSV models.
//!
//! Conversions only operate on the 3 color components, alpha is carried
//! separately by the callers.
//!
//! NOTE: When converting an achromatic color to HSV the hue is powerless and
//!       is reported as NaN. Callers decide what hue to keep.
//!
//! ```rust
//! use colorpick::models::Rgb;
//! let hsv = Rgb::new(0.5, 1.0, 1.0).to_hsv();
//! assert_eq!(hsv.hue, 180.0);
//! let gray = Rgb::new(0.5, 0.5, 0.5).to_hsv();
//! assert!(gray.is_hue_missing());
//! ```

use crate::{
    color::Components,
    models::{Hsv, Rgb},
};

impl Rgb {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to RGB. A missing hue is
    /// treated as `0.0`, which does not matter for achromatic colors.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{normalize, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = from.map(normalize);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (normalize_hue(hue), min, max)
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let delta = max - min;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        Components(hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let hue = if from.0.is_nan() {
            0.0
        } else {
            normalize_hue(from.0)
        };
        let saturation = normalize(from.1);
        let value = normalize(from.2);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }
}
