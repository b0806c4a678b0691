//! Picker state — the color model, output format, and drag engine behind
//! one toolkit-agnostic surface.
//!
//! The embedding layer owns element creation, event binding, and popup
//! placement; it feeds pointer coordinates and zone offsets in, and
//! writes the returned strings and knob positions out.

use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;

use crate::color::Color;
use crate::constants::{DEFAULT_SEED, SLIDER_RANGE};
use crate::drag::{DragController, KnobPos, Point};
use crate::format::{Format, FormatError};
use crate::parse::ParseError;
use crate::slider::{Orientation, Zone};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique picker instance id.
///
/// Lets the embedding layer correlate a popup surface with its trigger
/// element without a shared registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerId(u64);

impl PickerId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Zone-local knob pixel positions for the three surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Knobs {
    pub saturation: KnobPos,
    pub hue: KnobPos,
    pub alpha: KnobPos,
}

/// Everything the embedding layer needs to redraw after a change.
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    /// The color in the configured output format (hex when the
    /// configured token is broken).
    pub value: String,
    /// Preview swatch background; tracks `value`.
    pub preview: String,
    /// Saturation-plane background: the current hue at full saturation
    /// and brightness, opaque.
    pub plane_background: String,
    /// Alpha-strip background: the current color as hex.
    pub alpha_background: String,
    /// Knob positions for the three zones.
    pub knobs: Knobs,
}

/// A color picker instance: one mutable [`Color`], a resolved output
/// format, a fixed orientation, and the drag engine.
#[derive(Debug)]
pub struct Picker {
    id: PickerId,
    color: Color,
    format: Result<Format, FormatError>,
    orientation: Orientation,
    drag: DragController,
}

impl Picker {
    /// Build a picker from an optional seed string and format token.
    ///
    /// An absent or empty seed means opaque white. An explicit token wins
    /// over the seed's own grammar; a token outside the closed set is
    /// recorded rather than substituted, so rendering can fall back to
    /// hex instead of blocking. A seed that matches no grammar is the
    /// caller's to handle.
    pub fn new(
        seed: Option<&str>,
        format_token: Option<&str>,
        orientation: Orientation,
    ) -> Result<Self, ParseError> {
        let seed = match seed {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_SEED,
        };
        let format = match format_token {
            Some(token) => Format::from_token(token),
            None => Ok(Format::infer(seed).unwrap_or_default()),
        };
        Ok(Self {
            id: PickerId::next(),
            color: Color::parse(seed)?,
            format,
            orientation,
            drag: DragController::new(orientation),
        })
    }

    pub fn id(&self) -> PickerId {
        self.id
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The resolved output format; `Err` when the configured token is
    /// outside the closed set.
    pub fn format(&self) -> Result<Format, FormatError> {
        self.format.clone()
    }

    /// Whether the configured format carries alpha (drives the alpha
    /// strip's visibility).
    pub fn alpha_enabled(&self) -> bool {
        self.format.as_ref().map(Format::has_alpha).unwrap_or(false)
    }

    /// Replace the color from an external value.
    pub fn set_value(&mut self, text: &str) -> Result<(), ParseError> {
        self.color = Color::parse(text)?;
        Ok(())
    }

    /// Knob positions for the current color — the inverse of the drag
    /// mapping, for redraw after non-drag updates.
    pub fn knob_positions(&self) -> Knobs {
        let c = &self.color;
        Knobs {
            saturation: KnobPos {
                left: c.s() * SLIDER_RANGE,
                top: SLIDER_RANGE - c.b() * SLIDER_RANGE,
            },
            hue: self.strip_pos(SLIDER_RANGE * (1.0 - c.h())),
            alpha: self.strip_pos(SLIDER_RANGE * (1.0 - c.a())),
        }
    }

    /// Format the current color, surfacing a broken format token.
    pub fn formatted(&self) -> Result<String, FormatError> {
        Ok(self.format.clone()?.render(&self.color))
    }

    /// The value string, the three swatch targets, and the knobs.
    ///
    /// A broken format token downgrades the value and preview to hex; a
    /// broken preview must never block interaction.
    pub fn render(&self) -> Render {
        let value = match self.formatted() {
            Ok(value) => value,
            Err(err) => {
                warn!("{err}; falling back to hex");
                self.color.to_hex()
            }
        };
        Render {
            preview: value.clone(),
            value,
            plane_background: Color::hex_of(self.color.h(), 1.0, 1.0, 1.0),
            alpha_background: self.color.to_hex(),
            knobs: self.knob_positions(),
        }
    }

    /// Drag-start; `Some` with a refreshed render when a zone was hit.
    pub fn drag_start(
        &mut self,
        zone: Option<Zone>,
        zone_offset: Point,
        pointer: Point,
    ) -> Option<Render> {
        let pos = self.drag.start(zone, zone_offset, pointer, &mut self.color)?;
        Some(self.render_with_active_knob(pos))
    }

    /// Drag-move; `Some` with a refreshed render while a session is
    /// active.
    pub fn drag_move(&mut self, pointer: Point) -> Option<Render> {
        let pos = self.drag.drag(pointer, &mut self.color)?;
        Some(self.render_with_active_knob(pos))
    }

    /// Drag-end.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Whether a drag session is active.
    pub fn dragging(&self) -> bool {
        self.drag.dragging()
    }

    /// Render, with the dragged zone's knob at its raw clamped pixel
    /// position rather than the color-derived one (alpha quantization
    /// would otherwise make the knob lag the pointer).
    fn render_with_active_knob(&self, pos: KnobPos) -> Render {
        let mut render = self.render();
        match self.drag.active_zone() {
            Some(Zone::Saturation) => render.knobs.saturation = pos,
            Some(Zone::Hue) => render.knobs.hue = pos,
            Some(Zone::Alpha) => render.knobs.alpha = pos,
            None => {}
        }
        render
    }

    fn strip_pos(&self, v: f64) -> KnobPos {
        match self.orientation {
            Orientation::Vertical => KnobPos { left: 0.0, top: v },
            Orientation::Horizontal => KnobPos { left: v, top: 0.0 },
        }
    }
}
