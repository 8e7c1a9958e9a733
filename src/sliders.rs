//! The four channel sliders and the synchronization that keeps them in step
//! with the color model without feeding their own change handlers.

use crate::{
    color::{Channel, Channels, Component, Rgba},
    math::{normalize, round_to_digits},
    models::Rgb,
};

/// Number of decimal digits slider values are displayed with.
pub const DISPLAY_DIGITS: i32 = 3;

/// A value change raised by a slider's notifying update path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChanged {
    /// The slider that changed.
    pub channel: Channel,
    /// Value before the change.
    pub previous: Component,
    /// Value after the change.
    pub value: Component,
}

/// A single channel slider with a range of `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    channel: Channel,
    value: Component,
    commits: u64,
}

impl Slider {
    fn new(channel: Channel, value: Component) -> Self {
        Self {
            channel,
            value: normalize(value),
            commits: 0,
        }
    }

    /// The channel this slider edits.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// The label shown next to the slider.
    pub fn label(&self) -> &'static str {
        match self.channel {
            Channel::Red => Rgb::COMPONENT_NAMES[0],
            Channel::Green => Rgb::COMPONENT_NAMES[1],
            Channel::Blue => Rgb::COMPONENT_NAMES[2],
            Channel::Alpha => "Alpha",
        }
    }

    /// Lowest and highest value of the slider.
    pub fn range(&self) -> (Component, Component) {
        (0.0, 1.0)
    }

    /// The displayed value.
    pub fn value(&self) -> Component {
        self.value
    }

    /// How many times a user edit raised this slider's change handler.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// The notifying update path, used for user edits. Returns the change to
    /// hand to the slider's change handler, or `None` if the value did not
    /// change.
    pub fn set_value(&mut self, value: Component) -> Option<ValueChanged> {
        let value = normalize(value);
        if value == self.value {
            return None;
        }

        let previous = std::mem::replace(&mut self.value, value);
        self.commits += 1;

        Some(ValueChanged {
            channel: self.channel,
            previous,
            value,
        })
    }

    /// The silent update path, used when the picker itself changes the
    /// displayed value. Returns true if the displayed value changed.
    pub fn set_value_without_notify(&mut self, value: Component) -> bool {
        let value = normalize(value);
        let changed = value != self.value;
        self.value = value;
        changed
    }
}

/// The red, green, blue and alpha sliders.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderSync {
    sliders: [Slider; 4],
}

impl SliderSync {
    /// Create sliders showing the given color.
    pub fn new(color: Rgba) -> Self {
        let mut sync = Self {
            sliders: Channel::ALL.map(|channel| Slider::new(channel, 0.0)),
        };
        sync.push(color);
        sync
    }

    /// The slider for a channel.
    pub fn slider(&self, channel: Channel) -> &Slider {
        &self.sliders[Self::index(channel)]
    }

    /// All sliders in display order.
    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// The displayed value of a channel.
    pub fn value(&self, channel: Channel) -> Component {
        self.slider(channel).value()
    }

    /// Apply a user edit to a slider. Returns the change for the slider's
    /// handler, or `None` when the edit did not change the displayed value.
    pub fn commit(&mut self, channel: Channel, value: Component) -> Option<ValueChanged> {
        self.sliders[Self::index(channel)].set_value(value)
    }

    /// Show a color on all four sliders through the silent update path.
    /// Values are rounded for display only. Returns the channels whose
    /// displayed value changed.
    pub fn push(&mut self, color: Rgba) -> Channels {
        self.sliders
            .iter_mut()
            .filter_map(|slider| {
                let shown = round_to_digits(color.channel(slider.channel), DISPLAY_DIGITS);
                slider
                    .set_value_without_notify(shown)
                    .then(|| slider.channel.flag())
            })
            .fold(Channels::empty(), |acc, flag| acc | flag)
    }

    fn index(channel: Channel) -> usize {
        match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_ranges() {
        let sync = SliderSync::new(Rgba::WHITE);
        let labels = sync.sliders().iter().map(Slider::label).collect::<Vec<_>>();
        assert_eq!(labels, ["Red", "Green", "Blue", "Alpha"]);
        assert!(sync.sliders().iter().all(|s| s.range() == (0.0, 1.0)));
    }

    #[test]
    fn push_is_silent_and_rounded() {
        let mut sync = SliderSync::new(Rgba::WHITE);
        let changed = sync.push(Rgba::new(0.12345, 1.0, 0.5, 1.0));

        assert_eq!(changed, Channels::RED | Channels::BLUE);
        assert_eq!(sync.value(Channel::Red), 0.123);
        assert_eq!(sync.value(Channel::Blue), 0.5);
        assert!(sync.sliders().iter().all(|s| s.commits() == 0));

        assert_eq!(sync.push(Rgba::new(0.12345, 1.0, 0.5, 1.0)), Channels::empty());
    }

    #[test]
    fn commit_notifies_once_per_change() {
        let mut sync = SliderSync::new(Rgba::WHITE);

        let change = sync.commit(Channel::Green, 0.25).unwrap();
        assert_eq!(
            change,
            ValueChanged {
                channel: Channel::Green,
                previous: 1.0,
                value: 0.25,
            }
        );
        assert_eq!(sync.slider(Channel::Green).commits(), 1);

        // Same value again: nothing to notify.
        assert_eq!(sync.commit(Channel::Green, 0.25), None);
        assert_eq!(sync.slider(Channel::Green).commits(), 1);

        // Values are clamped to the slider range.
        let change = sync.commit(Channel::Alpha, -4.0).unwrap();
        assert_eq!(change.value, 0.0);
    }
}
