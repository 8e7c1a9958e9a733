//! Mapping between the draggable indicator's position on the palette and the
//! gradient raster, plus the drag state machine that gates pointer input.

use euclid::{Point2D, Size2D, Vector2D};

use crate::{
    color::Component,
    error::LayoutError,
    math::{almost_zero, normalize},
    models::Rgb,
    raster::GradientRaster,
};

/// Unit tag for coordinates relative to the gradient area's origin (top left,
/// y pointing down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteSpace;

/// A position on the palette.
pub type Point = Point2D<Component, PaletteSpace>;
/// A pointer movement on the palette.
pub type Vector = Vector2D<Component, PaletteSpace>;
/// A size on the palette.
pub type Size = Size2D<Component, PaletteSpace>;

/// Whether the indicator is following the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// Pointer moves are ignored.
    #[default]
    Idle,
    /// Pointer moves drag the indicator.
    Dragging,
}

/// The element a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The press position is relative to the gradient area's origin.
    GradientArea,
    /// The press position is relative to the indicator's origin.
    Indicator,
}

/// A color looked up from the raster at the indicator's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Raster cell the indicator maps to.
    pub cell: (usize, usize),
    /// Saturation of the cell.
    pub saturation: Component,
    /// Value of the cell.
    pub value: Component,
    /// The stored color of the cell.
    pub color: Rgb,
}

/// Tracks the indicator and converts its position to raster cells and back.
///
/// The indicator position is the top left corner of the indicator glyph and
/// always stays within `[-half_pointer, palette_size - half_pointer]` on each
/// axis.
#[derive(Debug)]
pub struct PointerMapper {
    palette_size: Size,
    pointer_size: Component,
    layout: Option<Size>,
    position: Point,
    state: DragState,
}

impl PointerMapper {
    /// Create a mapper for a palette of the given size and an indicator with
    /// the given diameter. The layout is unresolved until
    /// [`PointerMapper::resolve_layout`] is called.
    pub fn new(palette_size: Size, pointer_size: Component) -> Self {
        let half = pointer_size / 2.0;
        Self {
            palette_size,
            pointer_size,
            layout: None,
            position: Point::new(-half, -half),
            state: DragState::Idle,
        }
    }

    /// Record the resolved size of the gradient area.
    pub fn resolve_layout(&mut self, area: Size) {
        self.layout = Some(area);
    }

    /// The indicator's current position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The area the indicator position is mapped over: the resolved palette
    /// size minus the indicator glyph.
    pub fn bounds(&self) -> Result<Size, LayoutError> {
        let area = self.layout.ok_or(LayoutError::Uninitialized)?;
        let bounds = Size::new(area.width - self.pointer_size, area.height - self.pointer_size);

        let usable = |c: Component| c.is_finite() && c > 0.0 && !almost_zero(c);
        if !usable(bounds.width) || !usable(bounds.height) {
            return Err(LayoutError::Degenerate {
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(bounds)
    }

    /// Start a drag. The indicator is centered on the press position.
    pub fn press(&mut self, target: PointerTarget, local: Point) -> Point {
        let on_area = match target {
            PointerTarget::GradientArea => local,
            PointerTarget::Indicator => self.position + local.to_vector(),
        };
        let half = self.half_pointer();

        self.position = self.clamp(on_area - Vector::new(half, half));
        self.state = DragState::Dragging;
        self.position
    }

    /// Move the indicator by `delta` if a drag is in progress. Returns the new
    /// position, or `None` when idle.
    pub fn drag(&mut self, delta: Vector) -> Option<Point> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging => {
                self.position = self.clamp(self.position + delta);
                Some(self.position)
            }
        }
    }

    /// End a drag.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// The indicator position normalized over the bounds, `[0, 1]` on each
    /// axis, y pointing down.
    pub fn normalized(&self) -> Result<(Component, Component), LayoutError> {
        let bounds = self.bounds()?;
        Ok((
            normalize(self.position.x / bounds.width),
            normalize(self.position.y / bounds.height),
        ))
    }

    /// The raster cell under the indicator. The vertical axis is inverted: the
    /// top of the palette is the highest value.
    pub fn cell(&self, dimension: usize) -> Result<(usize, usize), LayoutError> {
        let (x, y) = self.normalized()?;
        let last = (dimension - 1) as Component;
        Ok((
            (x * last).floor() as usize,
            ((1.0 - y) * last).floor() as usize,
        ))
    }

    /// Look up the color under the indicator.
    pub fn sample(&self, raster: &GradientRaster) -> Result<Sample, LayoutError> {
        let (x, y) = self.cell(raster.dimension())?;
        let (saturation, value) = raster.cell_saturation_value(x, y);
        Ok(Sample {
            cell: (x, y),
            saturation,
            value,
            color: raster.sample(x, y),
        })
    }

    /// Move the indicator over the given raster cell, such that
    /// [`PointerMapper::cell`] maps back to it.
    pub fn place_at_cell(
        &mut self,
        cell: (usize, usize),
        dimension: usize,
    ) -> Result<Point, LayoutError> {
        let bounds = self.bounds()?;
        let last = (dimension - 1) as Component;

        // Aim for the middle of the cell so flooring maps back to it.
        let to_fraction = |index: usize| ((index as Component + 0.5) / last).min(1.0);
        let x = to_fraction(cell.0);
        let y = 1.0 - to_fraction(cell.1);

        self.position = self.clamp(Point::new(x * bounds.width, y * bounds.height));
        Ok(self.position)
    }

    fn half_pointer(&self) -> Component {
        self.pointer_size / 2.0
    }

    fn clamp(&self, position: Point) -> Point {
        let half = self.half_pointer();
        position.clamp(
            Point::new(-half, -half),
            Point::new(
                self.palette_size.width - half,
                self.palette_size.height - half,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    const DIM: usize = 64;

    fn mapper() -> PointerMapper {
        let mut mapper = PointerMapper::new(Size::new(300.0, 300.0), 32.0);
        mapper.resolve_layout(Size::new(300.0, 300.0));
        mapper
    }

    #[test]
    fn top_left_is_white_side() {
        let raster = GradientRaster::new(DIM, 0.0);
        let mut mapper = mapper();
        mapper.press(PointerTarget::GradientArea, Point::new(0.0, 0.0));

        let sample = mapper.sample(&raster).unwrap();
        assert_eq!(sample.cell, (0, DIM - 1));
        approx::assert_abs_diff_eq!(sample.saturation, 0.0);
        approx::assert_abs_diff_eq!(sample.value, 1.0, epsilon = 1.5 / DIM as Component);
    }

    #[test]
    fn bottom_right_is_black_side() {
        let raster = GradientRaster::new(DIM, 0.0);
        let mut mapper = mapper();
        mapper.press(PointerTarget::GradientArea, Point::new(300.0, 300.0));

        let sample = mapper.sample(&raster).unwrap();
        assert_eq!(sample.cell, (DIM - 1, 0));
        approx::assert_abs_diff_eq!(sample.saturation, 1.0, epsilon = 1.5 / DIM as Component);
        approx::assert_abs_diff_eq!(sample.value, 0.0);
        assert_eq!(sample.color, raster.sample(DIM - 1, 0));
    }

    #[test]
    fn press_centers_indicator() {
        let mut mapper = mapper();
        let position = mapper.press(PointerTarget::GradientArea, Point::new(100.0, 50.0));
        assert_eq!(position, Point::new(84.0, 34.0));
        assert_eq!(mapper.state(), DragState::Dragging);
    }

    #[test]
    fn press_on_indicator_is_relative_to_it() {
        let mut mapper = mapper();
        mapper.press(PointerTarget::GradientArea, Point::new(100.0, 100.0));
        mapper.release();

        // Pressing the indicator's own center keeps it where it is.
        let position = mapper.press(PointerTarget::Indicator, Point::new(16.0, 16.0));
        assert_eq!(position, Point::new(84.0, 84.0));

        let position = mapper.press(PointerTarget::Indicator, Point::new(26.0, 6.0));
        assert_eq!(position, Point::new(94.0, 74.0));
    }

    #[test]
    fn drag_only_moves_while_dragging() {
        let mut mapper = mapper();
        let start = mapper.position();
        assert_eq!(mapper.drag(Vector::new(10.0, 10.0)), None);
        assert_eq!(mapper.position(), start);

        mapper.press(PointerTarget::GradientArea, Point::new(100.0, 100.0));
        assert_eq!(mapper.drag(Vector::new(10.0, -5.0)), Some(Point::new(94.0, 79.0)));

        mapper.release();
        assert_eq!(mapper.state(), DragState::Idle);
        assert_eq!(mapper.drag(Vector::new(10.0, 10.0)), None);
    }

    #[test]
    fn drag_is_clamped_to_palette() {
        let raster = GradientRaster::new(DIM, 0.0);
        let mut mapper = mapper();
        mapper.press(PointerTarget::GradientArea, Point::new(150.0, 150.0));

        let position = mapper.drag(Vector::new(1000.0, -1000.0)).unwrap();
        assert_eq!(position, Point::new(284.0, -16.0));

        // The sample follows the clamped position, not the raw pointer.
        let sample = mapper.sample(&raster).unwrap();
        assert_eq!(sample.cell, (DIM - 1, DIM - 1));

        let position = mapper.drag(Vector::new(-10.0, 5.0)).unwrap();
        assert_eq!(position, Point::new(274.0, -11.0));
    }

    #[test]
    fn unresolved_layout() {
        let raster = GradientRaster::new(DIM, 0.0);
        let mapper = PointerMapper::new(Size::new(300.0, 300.0), 32.0);
        assert_eq!(mapper.bounds(), Err(LayoutError::Uninitialized));
        assert_eq!(mapper.sample(&raster), Err(LayoutError::Uninitialized));
    }

    #[test]
    fn degenerate_layout() {
        let mut mapper = PointerMapper::new(Size::new(300.0, 300.0), 32.0);

        mapper.resolve_layout(Size::new(32.0, 300.0));
        assert!(matches!(mapper.bounds(), Err(LayoutError::Degenerate { .. })));

        mapper.resolve_layout(Size::new(Component::NAN, 300.0));
        assert!(matches!(mapper.bounds(), Err(LayoutError::Degenerate { .. })));

        mapper.resolve_layout(Size::new(10.0, 10.0));
        assert!(matches!(mapper.bounds(), Err(LayoutError::Degenerate { .. })));

        mapper.resolve_layout(Size::new(300.0, 200.0));
        assert_eq!(mapper.bounds(), Ok(Size::new(268.0, 168.0)));
    }

    #[test]
    fn placement_maps_back_to_the_same_cell() {
        let mut mapper = mapper();
        for y in 0..DIM {
            for x in 0..DIM {
                mapper.place_at_cell((x, y), DIM).unwrap();
                assert_eq!(mapper.cell(DIM).unwrap(), (x, y));
            }
        }
    }

    #[test]
    fn normalized_position() {
        let mut mapper = mapper();
        mapper.press(PointerTarget::GradientArea, Point::new(150.0, 16.0));
        let (x, y) = mapper.normalized().unwrap();
        assert_component_eq!(x, 134.0 / 268.0);
        assert_component_eq!(y, 0.0);
    }
}
