//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 unless noted.

/// HSB/HSV → RGB via the hexagonal sector algorithm.
///
/// Hue is circular and taken mod 1 first. Chroma `C = b·s` and the
/// secondary component `X` are distributed over R, G, B by fixed
/// per-sector tables. Returns normalized (r, g, b); callers quantize to
/// 8-bit where needed.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, b: f64) -> (f64, f64, f64) {
    let h6 = (h * 360.0).rem_euclid(360.0) / 60.0;
    let c = b * s;
    let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
    let m = b - c;
    let i = h6 as usize % 6;
    (
        m + [c, x, 0.0, 0.0, x, c][i],
        m + [x, c, c, x, 0.0, 0.0][i],
        m + [0.0, 0.0, x, c, c, x][i],
    )
}

/// RGB → HSB/HSV. All values 0.0–1.0.
///
/// Hue is resolved from whichever channel holds the maximum (R, then G,
/// then B) and wrapped circularly into [0,1]. An achromatic input — and
/// an exact hue of zero — comes back as hue 1.0 rather than 0.0;
/// hue-knob placement relies on this sentinel.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g).max(b);
    let c = v - r.min(g).min(b);
    let s = if c == 0.0 { 0.0 } else { c / v };
    let sector = if c == 0.0 {
        0.0
    } else if v == r {
        (g - b) / c
    } else if v == g {
        (b - r) / c + 2.0
    } else {
        (r - g) / c + 4.0
    };
    let h = (sector + 360.0).rem_euclid(6.0) / 6.0;
    (if h == 0.0 { 1.0 } else { h }, s, v)
}

/// One tap of the HSL → RGB transform: piecewise interpolation across the
/// six 60°-equivalent sectors. `h` outside [0,1] is wrapped by one turn.
fn hue_to_rgb(p: f64, q: f64, h: f64) -> f64 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };
    if h * 6.0 < 1.0 {
        p + (q - p) * h * 6.0
    } else if h * 2.0 < 1.0 {
        q
    } else if h * 3.0 < 2.0 {
        p + (q - p) * (2.0 / 3.0 - h) * 6.0
    } else {
        p
    }
}

/// HSL → RGB via the three-tap transform at `h + 1/3`, `h`, `h − 1/3`.
///
/// Negative saturation clamps to zero. Output channels are quantized to
/// 8-bit values (returned as 0–255 floats), matching the textual
/// hsl()/hsla() pipeline.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = if s < 0.0 { 0.0 } else { s };
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round(),
        (hue_to_rgb(p, q, h) * 255.0).round(),
        (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn to_255(rgb: (f64, f64, f64)) -> (u8, u8, u8) {
        (
            (rgb.0 * 255.0).round() as u8,
            (rgb.1 * 255.0).round() as u8,
            (rgb.2 * 255.0).round() as u8,
        )
    }

    #[test]
    fn hsb_to_rgb_primaries() {
        assert_eq!(to_255(hsb_to_rgb(0.0, 1.0, 1.0)), (255, 0, 0));
        assert_eq!(to_255(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0)), (0, 255, 0));
        assert_eq!(to_255(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0)), (0, 0, 255));
        // Hue 1.0 is one full turn: red again.
        assert_eq!(to_255(hsb_to_rgb(1.0, 1.0, 1.0)), (255, 0, 0));
    }

    #[test]
    fn hsb_to_rgb_wraps_hue() {
        assert_eq!(to_255(hsb_to_rgb(1.25, 1.0, 1.0)), to_255(hsb_to_rgb(0.25, 1.0, 1.0)));
        assert_eq!(to_255(hsb_to_rgb(-0.75, 1.0, 1.0)), to_255(hsb_to_rgb(0.25, 1.0, 1.0)));
    }

    #[test]
    fn achromatic_hue_sentinel_is_one() {
        let (h, s, v) = rgb_to_hsb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
        assert_eq!(h, 1.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 128.0 / 255.0);
        // Pure red resolves to an exact hue of zero, which the sentinel
        // also maps to the equivalent full turn.
        let (h, s, v) = rgb_to_hsb(1.0, 0.0, 0.0);
        assert_eq!((h, s, v), (1.0, 1.0, 1.0));
    }

    #[test]
    fn black_is_achromatic_with_zero_saturation() {
        let (h, s, v) = rgb_to_hsb(0.0, 0.0, 0.0);
        assert_eq!((h, s, v), (1.0, 0.0, 0.0));
    }

    #[test]
    fn rgb_round_trip_is_integer_exact() {
        // Sweep a coarse grid of 8-bit triples plus the cube corners.
        for r in (0u16..=255).step_by(15) {
            for g in (0u16..=255).step_by(15) {
                for b in (0u16..=255).step_by(15) {
                    let (h, s, v) =
                        rgb_to_hsb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
                    let back = to_255(hsb_to_rgb(h, s, v));
                    assert_eq!(back, (r as u8, g as u8, b as u8), "({r},{g},{b})");
                }
            }
        }
    }

    #[test]
    fn sector_ties_resolve_red_first() {
        // Yellow holds the max in both R and G; the R branch wins.
        let (h, s, v) = rgb_to_hsb(1.0, 1.0, 0.0);
        assert!((h - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!((s, v), (1.0, 1.0));
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(240.0 / 360.0, 1.0, 0.5), (0.0, 0.0, 255.0));
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(120.0 / 360.0, 1.0, 0.5), (0.0, 255.0, 0.0));
    }

    #[test]
    fn hsl_to_rgb_clamps_negative_saturation() {
        assert_eq!(hsl_to_rgb(0.5, -0.25, 0.5), hsl_to_rgb(0.5, 0.0, 0.5));
    }

    #[test]
    fn hsl_lightness_extremes() {
        assert_eq!(hsl_to_rgb(0.3, 1.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(0.3, 1.0, 1.0), (255.0, 255.0, 255.0));
    }
}
