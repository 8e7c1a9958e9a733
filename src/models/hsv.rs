//! Model a color with the HSV notation.

use crate::color::Component;

colorpick_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    ///
    /// A hue of NaN means the hue is missing, which is what converting an
    /// achromatic color yields.
    pub struct Hsv {
        /// The hue in degrees, `[0, 360)`.
        hue: Component,
        /// The saturation, `[0, 1]`.
        saturation: Component,
        /// The value (brightness), `[0, 1]`.
        value: Component,
    }
}

impl Hsv {
    /// Returns true if the conversion that produced this color could not
    /// determine a hue.
    pub fn is_hue_missing(&self) -> bool {
        self.hue.is_nan()
    }
}
