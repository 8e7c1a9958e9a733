//! The canonical color state of a picker: hue, saturation and value plus a
//! separate alpha channel.

use crate::{
    color::{Component, Rgba},
    math::{normalize, normalize_hue},
    models::Hsv,
};

/// HSV plus alpha, the single source of truth for the selected color.
///
/// All inputs are clamped before they are stored. The hue survives
/// conversions of achromatic colors, so moving through gray and back keeps the
/// palette on the same hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorModel {
    hsv: Hsv,
    alpha: Component,
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(Rgba::WHITE)
    }
}

impl ColorModel {
    /// Create a model holding the given color.
    pub fn new(color: Rgba) -> Self {
        let mut model = Self {
            hsv: Hsv::new(0.0, 0.0, 0.0),
            alpha: 1.0,
        };
        model.set_from_rgba(color);
        model
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> Component {
        self.hsv.hue
    }

    /// Saturation, `[0, 1]`.
    pub fn saturation(&self) -> Component {
        self.hsv.saturation
    }

    /// Value, `[0, 1]`.
    pub fn value(&self) -> Component {
        self.hsv.value
    }

    /// Alpha, `[0, 1]`.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// The stored color in HSV notation.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Replace the whole color. Achromatic colors keep the current hue.
    pub fn set_from_rgba(&mut self, color: Rgba) {
        let hsv = color.rgb().to_hsv();

        let hue = if hsv.is_hue_missing() {
            self.hsv.hue
        } else {
            normalize_hue(hsv.hue)
        };

        self.hsv = Hsv::new(hue, normalize(hsv.saturation), normalize(hsv.value));
        self.alpha = normalize(color.alpha);
    }

    /// Set saturation and value from a raster sample, leaving hue and alpha
    /// alone.
    pub fn set_from_sample(&mut self, saturation: Component, value: Component) {
        self.hsv.saturation = normalize(saturation);
        self.hsv.value = normalize(value);
    }

    /// Set only the alpha channel.
    pub fn set_alpha(&mut self, alpha: Component) {
        self.alpha = normalize(alpha);
    }

    /// The stored color as RGBA.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_rgb(self.hsv.to_rgb(), self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn defaults_to_opaque_white() {
        let model = ColorModel::default();
        assert_eq!(model.to_rgba(), Rgba::WHITE);
        assert_eq!(model.saturation(), 0.0);
        assert_eq!(model.value(), 1.0);
        assert_eq!(model.hue(), 0.0);
    }

    #[test]
    fn set_from_rgba() {
        let mut model = ColorModel::default();
        model.set_from_rgba(Rgba::new(0.5, 1.0, 1.0, 0.25));
        assert_component_eq!(model.hue(), 180.0);
        assert_component_eq!(model.saturation(), 0.5);
        assert_component_eq!(model.value(), 1.0);
        assert_eq!(model.alpha(), 0.25);

        let rgba = model.to_rgba();
        assert_component_eq!(rgba.red, 0.5);
        assert_component_eq!(rgba.green, 1.0);
        assert_component_eq!(rgba.blue, 1.0);
        assert_component_eq!(rgba.alpha, 0.25);
    }

    #[test]
    fn achromatic_colors_keep_the_previous_hue() {
        let mut model = ColorModel::new(Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_component_eq!(model.hue(), 240.0);

        for gray in [0.0, 0.3, 1.0] {
            model.set_from_rgba(Rgba::new(gray, gray, gray, 1.0));
            assert_eq!(model.saturation(), 0.0);
            assert_component_eq!(model.hue(), 240.0);
            assert!(!model.hue().is_nan());
        }

        // A zero hue is kept as zero.
        let mut model = ColorModel::new(Rgba::new(1.0, 0.0, 0.0, 1.0));
        model.set_from_rgba(Rgba::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(model.hue(), 0.0);
    }

    #[test]
    fn sample_keeps_hue_and_alpha() {
        let mut model = ColorModel::new(Rgba::new(0.0, 1.0, 0.0, 0.5));
        model.set_from_sample(0.25, 0.75);
        assert_component_eq!(model.hue(), 120.0);
        assert_eq!(model.saturation(), 0.25);
        assert_eq!(model.value(), 0.75);
        assert_eq!(model.alpha(), 0.5);

        model.set_from_sample(-1.0, 2.0);
        assert_eq!(model.saturation(), 0.0);
        assert_eq!(model.value(), 1.0);
    }

    #[test]
    fn alpha_only() {
        let mut model = ColorModel::new(Rgba::new(0.2, 0.4, 0.6, 1.0));
        let before = model.to_rgba();

        model.set_alpha(0.5);
        let after = model.to_rgba();
        assert_eq!(after.alpha, 0.5);
        assert_eq!(after.rgb(), before.rgb());

        model.set_alpha(3.0);
        assert_eq!(model.alpha(), 1.0);
    }
}
