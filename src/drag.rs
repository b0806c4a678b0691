//! Drag engine — pointer deltas to clamped knob positions and channel
//! updates.
//!
//! One controller per picker. It is idle between sessions; a drag-start
//! inside a recognized zone opens a session and every move clamps the
//! knob into the zone's travel bounds, then feeds each active axis,
//! divided by the 100-px travel range, into its bound channel setter.

use log::debug;

use crate::color::Color;
use crate::constants::SLIDER_RANGE;
use crate::slider::{Orientation, SliderConfig, Zone};

/// A pointer position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A knob position in zone-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnobPos {
    pub left: f64,
    pub top: f64,
}

/// Transient per-session state, discarded at drag-end.
#[derive(Debug)]
struct Session {
    zone: Zone,
    config: SliderConfig,
    /// Click offset within the zone, the drag anchor.
    origin_left: f64,
    origin_top: f64,
    /// Pointer coordinates at drag-start; moves are deltas against this.
    pointer_origin: Point,
}

/// Converts a drag-start plus a stream of moves into clamped knob
/// positions and channel updates on a [`Color`].
///
/// Starting inside a zone immediately processes one zero-delta move, so
/// the knob snaps to the click point before any real movement. Starting
/// anywhere else is a no-op, as are moves and ends while idle. Pointers
/// leaving the zone are clamped back into its bounds, never rejected.
/// Sessions are strictly sequential; the embedding layer guarantees at
/// most one active pointer session at a time.
#[derive(Debug, Default)]
pub struct DragController {
    orientation: Orientation,
    session: Option<Session>,
}

impl DragController {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            session: None,
        }
    }

    /// Whether a drag session is active.
    pub fn dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The zone under drag, while a session is active.
    pub fn active_zone(&self) -> Option<Zone> {
        self.session.as_ref().map(|s| s.zone)
    }

    /// Drag-start. `zone` is the surface under the pointer (`None` for
    /// anywhere else), `zone_offset` that surface's top-left in document
    /// coordinates, `pointer` the pointer itself. Returns the snapped
    /// knob position after the synthesized initial move.
    pub fn start(
        &mut self,
        zone: Option<Zone>,
        zone_offset: Point,
        pointer: Point,
        color: &mut Color,
    ) -> Option<KnobPos> {
        let zone = zone?;
        debug!("drag start in {zone:?} zone");
        self.session = Some(Session {
            zone,
            config: SliderConfig::for_zone(zone, self.orientation),
            origin_left: pointer.x - zone_offset.x,
            origin_top: pointer.y - zone_offset.y,
            pointer_origin: pointer,
        });
        self.drag(pointer, color)
    }

    /// Drag-move: clamp, write the channels, report the knob position.
    /// Ignored while idle.
    pub fn drag(&mut self, pointer: Point, color: &mut Color) -> Option<KnobPos> {
        let session = self.session.as_ref()?;
        let config = &session.config;
        let left = (session.origin_left + (pointer.x - session.pointer_origin.x))
            .clamp(0.0, config.max_left);
        let top =
            (session.origin_top + (pointer.y - session.pointer_origin.y)).clamp(0.0, config.max_top);
        if let Some(channel) = config.channel_left {
            channel.apply(color, left / SLIDER_RANGE);
        }
        if let Some(channel) = config.channel_top {
            channel.apply(color, top / SLIDER_RANGE);
        }
        Some(KnobPos { left, top })
    }

    /// Drag-end: discard the session and its listeners' state.
    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("drag end in {:?} zone", session.zone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_snaps_knob_to_click_point() {
        let mut color = Color::default();
        let mut drag = DragController::new(Orientation::Vertical);
        // Plane at (150, 250); click at (200, 300) is 50 px into it.
        let pos = drag
            .start(
                Some(Zone::Saturation),
                Point { x: 150.0, y: 250.0 },
                Point { x: 200.0, y: 300.0 },
                &mut color,
            )
            .unwrap();
        assert_eq!(pos, KnobPos { left: 50.0, top: 50.0 });
        assert_eq!(color.s(), 0.5);
        assert_eq!(color.b(), 0.5);
        assert!(drag.dragging());
        assert_eq!(drag.active_zone(), Some(Zone::Saturation));
    }

    #[test]
    fn move_advances_and_clamps_to_bounds() {
        let mut color = Color::default();
        let mut drag = DragController::new(Orientation::Vertical);
        drag.start(
            Some(Zone::Saturation),
            Point { x: 150.0, y: 250.0 },
            Point { x: 200.0, y: 300.0 },
            &mut color,
        );
        // +50 px right lands exactly on the plane's far edge.
        let pos = drag
            .drag(Point { x: 250.0, y: 300.0 }, &mut color)
            .unwrap();
        assert_eq!(pos, KnobPos { left: 100.0, top: 50.0 });
        assert_eq!(color.s(), 1.0);
        // Far outside the zone still clamps into [0, 100].
        let pos = drag
            .drag(Point { x: -4000.0, y: 9000.0 }, &mut color)
            .unwrap();
        assert_eq!(pos, KnobPos { left: 0.0, top: 100.0 });
        assert_eq!(color.s(), 0.0);
        assert_eq!(color.b(), 0.0);
    }

    #[test]
    fn vertical_strip_pins_left_axis() {
        let mut color = Color::default();
        let mut drag = DragController::new(Orientation::Vertical);
        let pos = drag
            .start(
                Some(Zone::Hue),
                Point { x: 300.0, y: 250.0 },
                Point { x: 307.0, y: 275.0 },
                &mut color,
            )
            .unwrap();
        // The strip has no horizontal travel; the 7 px click offset
        // clamps to 0 and only the vertical axis drives a channel.
        assert_eq!(pos, KnobPos { left: 0.0, top: 25.0 });
        assert_eq!(color.h(), 0.75);
        assert_eq!(color.s(), 0.0);
    }

    #[test]
    fn horizontal_strip_drives_left_axis() {
        let mut color = Color::default();
        let mut drag = DragController::new(Orientation::Horizontal);
        drag.start(
            Some(Zone::Alpha),
            Point { x: 100.0, y: 400.0 },
            Point { x: 133.0, y: 406.0 },
            &mut color,
        );
        assert_eq!(color.a(), 0.67);
    }

    #[test]
    fn start_outside_zones_stays_idle() {
        let mut color = Color::default();
        let before = color;
        let mut drag = DragController::new(Orientation::Vertical);
        let pos = drag.start(None, Point::default(), Point { x: 10.0, y: 10.0 }, &mut color);
        assert_eq!(pos, None);
        assert!(!drag.dragging());
        assert_eq!(color, before);
    }

    #[test]
    fn moves_after_end_are_ignored() {
        let mut color = Color::default();
        let mut drag = DragController::new(Orientation::Vertical);
        drag.start(
            Some(Zone::Saturation),
            Point::default(),
            Point { x: 20.0, y: 20.0 },
            &mut color,
        );
        drag.end();
        assert!(!drag.dragging());
        let snapshot = color;
        assert_eq!(drag.drag(Point { x: 90.0, y: 90.0 }, &mut color), None);
        assert_eq!(color, snapshot);
    }

    #[test]
    fn alpha_strip_quantizes_through_the_setter() {
        let mut color = Color::default();
        let mut drag = DragController::new(Orientation::Vertical);
        drag.start(
            Some(Zone::Alpha),
            Point { x: 0.0, y: 0.0 },
            Point { x: 4.0, y: 33.4 },
            &mut color,
        );
        // 33.4 px → 0.334 on the knob axis → alpha 1 − 0.334 rounded to
        // two decimals.
        assert_eq!(color.a(), 0.67);
    }
}
