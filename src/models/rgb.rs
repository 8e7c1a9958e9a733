//! Model a color with red, green and blue components.

use crate::color::Component;

colorpick_macros::gen_model! {
    /// A color specified with red, green and blue components in `[0, 1]`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn components_round_trip() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb.to_components(), Components(0.1, 0.2, 0.3));
        assert_eq!(Rgb::from(Components(0.1, 0.2, 0.3)), rgb);
    }

    #[test]
    fn component_names() {
        assert_eq!(Rgb::COMPONENT_NAMES, ["Red", "Green", "Blue"]);
    }
}
