//! The color picker widget: owns the color model, the gradient raster, the
//! indicator and the sliders, and keeps them consistent as the host feeds it
//! input.

use crate::{
    color::{Channel, Component, Rgba},
    color_model::ColorModel,
    config::PickerConfig,
    error::ConfigError,
    events::{EventBus, Subscription},
    pointer::{DragState, Point, PointerMapper, PointerTarget, Size, Vector},
    raster::GradientRaster,
    sliders::{SliderSync, ValueChanged},
};

/// Where a picker is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built, waiting for [`ColorPicker::initialize`].
    Constructed,
    /// Accepting input.
    Ready,
    /// Torn down; input is ignored.
    Disposed,
}

/// A headless HSV color picker.
///
/// The host draws the palette from [`ColorPicker::raster`], places the
/// indicator at [`ColorPicker::indicator_position`], shows the sliders from
/// [`ColorPicker::sliders`], and forwards pointer and slider input. Every
/// completed interaction emits the selected color once to the subscribers.
///
/// ```rust
/// use colorpick::{Channel, ColorPicker, PickerConfig, Rgba, Size};
///
/// let mut picker = ColorPicker::new(PickerConfig::default()).unwrap();
/// let _subscription = picker.subscribe(|color| println!("picked {color:?}"));
///
/// picker.resolve_layout(Size::new(300.0, 300.0));
/// picker.initialize();
///
/// picker.commit_slider(Channel::Red, 0.5);
/// assert_eq!(picker.color().red, 0.5);
/// ```
#[derive(Debug)]
pub struct ColorPicker {
    config: PickerConfig,
    lifecycle: Lifecycle,
    model: ColorModel,
    raster: Option<GradientRaster>,
    pointer: PointerMapper,
    sliders: SliderSync,
    events: EventBus,
}

impl ColorPicker {
    /// Build a picker. Nothing is emitted and no input is accepted until
    /// [`ColorPicker::initialize`] is called.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let model = ColorModel::new(config.initial_color);

        Ok(Self {
            lifecycle: Lifecycle::Constructed,
            model,
            raster: None,
            pointer: PointerMapper::new(config.palette_size, config.pointer_size),
            sliders: SliderSync::new(model.to_rgba()),
            events: EventBus::new(),
            config,
        })
    }

    /// Finish setting up once the host has laid out the palette: show the
    /// initial color on the sliders, generate the raster, place the indicator
    /// and seed subscribers with the initial color.
    pub fn initialize(&mut self) {
        if self.lifecycle != Lifecycle::Constructed {
            log::warn!("color picker is already {:?}", self.lifecycle);
            return;
        }

        self.sliders.push(self.model.to_rgba());
        self.raster = Some(GradientRaster::new(
            self.config.raster_resolution,
            self.model.hue(),
        ));
        self.place_indicator();

        self.lifecycle = Lifecycle::Ready;
        log::debug!("color picker initialized with {:?}", self.model.to_rgba());

        self.events.emit(self.model.to_rgba());
    }

    /// Report the resolved size of the gradient area. May be called again when
    /// the palette is resized.
    pub fn resolve_layout(&mut self, area: Size) {
        self.pointer.resolve_layout(area);
        log::debug!("palette layout resolved to {area:?}");

        if self.lifecycle == Lifecycle::Ready && self.pointer.state() == DragState::Idle {
            self.place_indicator();
        }
    }

    /// Register a color-changed handler. It stays registered while the
    /// returned [`Subscription`] is alive.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Rgba) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// The selected color.
    pub fn color(&self) -> Rgba {
        self.model.to_rgba()
    }

    /// Select a color programmatically.
    pub fn set_color(&mut self, color: Rgba) {
        if !self.ensure_ready("set_color") {
            return;
        }

        self.model.set_from_rgba(color);
        self.sync_views();
        self.events.emit(self.model.to_rgba());
    }

    /// A pointer was pressed on the gradient area or the indicator. The
    /// indicator jumps under the pointer and a drag starts.
    pub fn pointer_down(&mut self, target: PointerTarget, local: Point) {
        if !self.ensure_ready("pointer_down") {
            return;
        }

        let position = self.pointer.press(target, local);
        log::trace!("drag started at {position:?}");

        if self.sample_at_indicator() {
            self.events.emit(self.model.to_rgba());
        }
    }

    /// The pointer moved by `delta`. Only has an effect while dragging.
    pub fn pointer_move(&mut self, delta: Vector) {
        if !self.ensure_ready("pointer_move") {
            return;
        }

        let Some(position) = self.pointer.drag(delta) else {
            return;
        };
        log::trace!("indicator dragged to {position:?}");

        if self.sample_at_indicator() {
            self.events.emit(self.model.to_rgba());
        }
    }

    /// The pointer was released anywhere.
    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    /// The pointer left the gradient area. Ends any drag.
    pub fn pointer_leave(&mut self) {
        self.pointer.release();
    }

    /// A user edit of a channel slider.
    pub fn commit_slider(&mut self, channel: Channel, value: Component) {
        if !self.ensure_ready("commit_slider") {
            return;
        }

        if let Some(change) = self.sliders.commit(channel, value) {
            self.on_slider_changed(change);
        }
    }

    /// Release the raster and drop every subscriber. Safe to call more than
    /// once; also runs when the picker is dropped.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }

        if let Some(raster) = self.raster.take() {
            raster.dispose();
        }
        self.events.clear();
        self.pointer.release();
        self.lifecycle = Lifecycle::Disposed;

        log::debug!("color picker disposed");
    }

    /// The current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The configuration the picker was built with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The color state.
    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    /// The gradient raster, once initialized and until disposed.
    pub fn raster(&self) -> Option<&GradientRaster> {
        self.raster.as_ref()
    }

    /// The channel sliders.
    pub fn sliders(&self) -> &SliderSync {
        &self.sliders
    }

    /// Top left corner of the indicator, relative to the gradient area.
    pub fn indicator_position(&self) -> Point {
        self.pointer.position()
    }

    /// Whether the indicator is being dragged.
    pub fn drag_state(&self) -> DragState {
        self.pointer.state()
    }

    /// Number of color-changed subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.events.len()
    }

    fn ensure_ready(&self, operation: &str) -> bool {
        match self.lifecycle {
            Lifecycle::Ready => true,
            // Hosts may forward input before their first layout pass completes.
            Lifecycle::Constructed => {
                log::warn!("{operation} called before the color picker was initialized");
                false
            }
            Lifecycle::Disposed => {
                log::warn!("{operation} called on a disposed color picker");
                false
            }
        }
    }

    fn on_slider_changed(&mut self, change: ValueChanged) {
        match change.channel {
            Channel::Alpha => self.model.set_alpha(change.value),
            channel => {
                // Edit the full precision color, not the rounded slider values.
                let color = self.model.to_rgba().with_channel(channel, change.value);
                self.model.set_from_rgba(color);
            }
        }

        self.sync_views();
        self.events.emit(self.model.to_rgba());
    }

    /// Bring sliders, raster and indicator in line with the model.
    fn sync_views(&mut self) {
        let changed = self.sliders.push(self.model.to_rgba());
        log::trace!("slider display changed for {changed:?}");

        if let Some(raster) = self.raster.as_mut() {
            raster.regenerate_if_changed(self.model.hue());
        }
        self.place_indicator();
    }

    /// Move the indicator over the raster cell nearest to the model's
    /// saturation and value.
    fn place_indicator(&mut self) {
        let Some(raster) = self.raster.as_ref() else {
            return;
        };

        let cell = raster.nearest_cell(self.model.saturation(), self.model.value());
        match self.pointer.place_at_cell(cell, raster.dimension()) {
            Ok(position) => log::trace!("indicator placed at {position:?} for cell {cell:?}"),
            Err(err) => log::warn!("can not place indicator: {err}"),
        }
    }

    /// Take saturation and value from the raster cell under the indicator.
    /// Returns false if the layout did not allow a lookup.
    fn sample_at_indicator(&mut self) -> bool {
        debug_assert!(self.raster.is_some(), "ready color picker without a raster");
        let Some(raster) = self.raster.as_ref() else {
            return false;
        };

        match self.pointer.sample(raster) {
            Ok(sample) => {
                self.model.set_from_sample(sample.saturation, sample.value);
                self.sliders.push(self.model.to_rgba());
                true
            }
            Err(err) => {
                log::warn!("can not pick color from palette: {err}");
                false
            }
        }
    }
}

impl Drop for ColorPicker {
    fn drop(&mut self) {
        self.dispose();
    }
}
