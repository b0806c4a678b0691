//! Sizing and seed constants for the picker core.

/// Knob travel range in device-independent pixels along a zone's active axis.
///
/// Knob pixel positions divide by this to produce normalized channel
/// values, so every zone must be rendered exactly this many pixels long
/// per active axis. This is a hard coupling, not a derived value.
pub const SLIDER_RANGE: f64 = 100.0;

/// Seed used when the caller supplies no color: opaque white.
pub const DEFAULT_SEED: &str = "#ffffff";
