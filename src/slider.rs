//! Slider zones and their drag-axis configuration.
//!
//! Each zone binds knob travel along one or both axes to a color channel.
//! The tables mirror the two stacked layouts: hue and alpha as vertical
//! strips by default, horizontal strips when the picker is built
//! horizontal. The saturation plane is identical in both.

use crate::color::Color;
use crate::constants::SLIDER_RANGE;

/// The three draggable surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// 2-D saturation/brightness plane.
    Saturation,
    /// 1-D hue strip.
    Hue,
    /// 1-D alpha strip.
    Alpha,
}

/// A color channel a knob axis can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
    Alpha,
}

impl Channel {
    /// Apply a normalized knob value to `color` through the channel's
    /// setter.
    pub(crate) fn apply(self, color: &mut Color, v: f64) {
        match self {
            Self::Hue => color.set_hue(v),
            Self::Saturation => color.set_saturation(v),
            Self::Lightness => color.set_lightness(v),
            Self::Alpha => color.set_alpha(v),
        }
    }
}

/// Strip stacking direction, fixed for the picker's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Knob travel bounds and per-axis channel bindings for one zone.
///
/// A 1-D strip leaves its unused axis at bound 0 with no channel.
#[derive(Debug, Clone, Copy)]
pub struct SliderConfig {
    pub max_left: f64,
    pub max_top: f64,
    pub channel_left: Option<Channel>,
    pub channel_top: Option<Channel>,
}

impl SliderConfig {
    /// Configuration for `zone` under `orientation`.
    pub fn for_zone(zone: Zone, orientation: Orientation) -> Self {
        match (zone, orientation) {
            (Zone::Saturation, _) => Self {
                max_left: SLIDER_RANGE,
                max_top: SLIDER_RANGE,
                channel_left: Some(Channel::Saturation),
                channel_top: Some(Channel::Lightness),
            },
            (Zone::Hue, Orientation::Vertical) => Self::vertical_strip(Channel::Hue),
            (Zone::Alpha, Orientation::Vertical) => Self::vertical_strip(Channel::Alpha),
            (Zone::Hue, Orientation::Horizontal) => Self::horizontal_strip(Channel::Hue),
            (Zone::Alpha, Orientation::Horizontal) => Self::horizontal_strip(Channel::Alpha),
        }
    }

    fn vertical_strip(channel: Channel) -> Self {
        Self {
            max_left: 0.0,
            max_top: SLIDER_RANGE,
            channel_left: None,
            channel_top: Some(channel),
        }
    }

    fn horizontal_strip(channel: Channel) -> Self {
        Self {
            max_left: SLIDER_RANGE,
            max_top: 0.0,
            channel_left: Some(channel),
            channel_top: None,
        }
    }
}
