//! # swatchbox
//!
//! A framework-agnostic color picker core.
//!
//! Keeps a canonical HSB color in sync with a textual representation
//! (hex/rgb/rgba/hsl/hsla) and turns pointer drags over the three picker
//! surfaces — saturation/brightness plane, hue strip, alpha strip — into
//! clamped, normalized channel updates. Embedding layers own the actual
//! elements and event plumbing; this crate owns the state and the math.
//!
//! Each zone's rendered size must be 100 device-independent pixels along
//! its active axes: knob pixels divide by [`SLIDER_RANGE`] to become
//! channel values.
//!
//! ## Usage
//!
//! ```rust
//! use swatchbox::{Orientation, Picker, Point, Zone};
//!
//! let mut picker = Picker::new(Some("rgba(0,255,0,0.5)"), None, Orientation::Vertical)?;
//!
//! // Pointer down inside the hue strip (strip top-left at document
//! // (180, 300), pointer at (180, 320)), then a 30 px downward drag:
//! picker.drag_start(
//!     Some(Zone::Hue),
//!     Point { x: 180.0, y: 300.0 },
//!     Point { x: 180.0, y: 320.0 },
//! );
//! let render = picker.drag_move(Point { x: 180.0, y: 350.0 }).expect("session active");
//! picker.drag_end();
//!
//! // The embedding layer writes these back to its elements.
//! println!("{} / plane {}", render.value, render.plane_background);
//! # Ok::<(), swatchbox::ParseError>(())
//! ```

mod color;
mod constants;
mod drag;
mod format;
mod math;
mod parse;
mod picker;
mod slider;

pub use color::{Color, Hsl, Rgb};
pub use constants::{DEFAULT_SEED, SLIDER_RANGE};
pub use drag::{DragController, KnobPos, Point};
pub use format::{Format, FormatError};
pub use parse::ParseError;
pub use picker::{Knobs, Picker, PickerId, Render};
pub use slider::{Channel, Orientation, SliderConfig, Zone};
