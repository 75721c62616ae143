//! Scalar and array color conversions.
//!
//! All functions here are pure. [`Color`](crate::color::Color) builds on them
//! to keep its RGB, HSV and hex views consistent; the array variants exist for
//! whole-image recoloring and produce exactly the scalar results element by
//! element.
//!
//! HSV components are stored rounded to [`PRECISION`] so that repeated
//! RGB/HSV round trips are stable.

use crate::error::{Error, Result};

/// Decimal places kept for h, s and v.
pub const PRECISION: i32 = 5;

const SCALE: f64 = 100_000.0;

/// Round to [`PRECISION`] decimal places.
#[must_use]
pub fn round5(x: f64) -> f64 {
    (x * SCALE).round() / SCALE
}

/// Wrap a hue into [0, 360).
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid may round tiny negatives up to exactly 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Wrap and round a hue, keeping the result below 360.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = round5(wrap_hue(h));
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Signed shortest angular distance from `from` to `to`, in (-180, 180].
#[must_use]
pub fn hue_offset(from: f64, to: f64) -> f64 {
    let d = wrap_hue(to - from);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Interpolate between two hues along the shortest arc.
#[must_use]
pub fn lerp_hue(from: f64, to: f64, t: f64) -> f64 {
    wrap_hue(from + hue_offset(from, to) * t)
}

// ============================================================================
// RGB <-> HSV
// ============================================================================

/// Hue of a chromatic color from its extrema, checked in sector order
/// red-yellow, yellow-green, green-cyan, cyan-blue, blue-magenta, magenta-red.
fn sector_hue(r: f64, g: f64, b: f64, max: f64, min: f64) -> Option<f64> {
    let f = |c: f64| (c - min) / (max - min);

    if r == max && b == min {
        Some(60.0 * f(g))
    } else if g == max && b == min {
        Some(120.0 - 60.0 * f(r))
    } else if g == max && r == min {
        Some(120.0 + 60.0 * f(b))
    } else if b == max && r == min {
        Some(240.0 - 60.0 * f(g))
    } else if b == max && g == min {
        Some(240.0 + 60.0 * f(r))
    } else if r == max && g == min {
        Some(360.0 - 60.0 * f(b))
    } else {
        None
    }
}

/// Convert floating-point RGB channels in [0, 255] to rounded HSV.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] if a channel is not finite or lies outside
/// [0, 255], and [`Error::AmbiguousConversion`] if no hue sector matches the
/// channel extrema.
///
/// # Example
///
/// ```
/// use chromaset::convert::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv([255.0, 255.0, 0.0]).unwrap();
/// assert_eq!(hsv, [60.0, 1.0, 1.0]);
/// ```
pub fn rgb_to_hsv(rgb: [f64; 3]) -> Result<[f64; 3]> {
    if rgb.iter().any(|c| !c.is_finite()) {
        return Err(Error::InvalidColor(format!("non-finite RGB channel in {rgb:?}")));
    }
    if rgb.iter().any(|c| !(0.0..=255.0).contains(c)) {
        return Err(Error::InvalidColor(format!("RGB channel outside [0, 255] in {rgb:?}")));
    }

    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max <= 0.0 {
        return Ok([0.0, 0.0, 0.0]);
    }

    let v = max / 255.0;
    if max == min {
        return Ok([0.0, 0.0, round5(v)]);
    }

    let s = 1.0 - min / max;
    let h = sector_hue(r, g, b, max, min).ok_or(Error::AmbiguousConversion { r, g, b })?;

    Ok([normalize_hue(h), round5(s), round5(v)])
}

/// Convert 8-bit RGB to rounded HSV.
///
/// Integer channels are always finite and in range, and distinct integer
/// extrema always fall into one of the six sectors, so this cannot fail.
#[must_use]
pub fn rgb8_to_hsv(rgb: [u8; 3]) -> [f64; 3] {
    match rgb_to_hsv(rgb.map(f64::from)) {
        Ok(hsv) => hsv,
        Err(e) => unreachable!("8-bit channels always convert: {e}"),
    }
}

/// Convert HSV to 8-bit RGB.
///
/// The hue is wrapped and s, v are clamped to [0, 1] before conversion.
///
/// # Example
///
/// ```
/// use chromaset::convert::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb([120.0, 1.0, 1.0]), [0, 255, 0]);
/// assert_eq!(hsv_to_rgb([0.0, 0.0, 0.5]), [128, 128, 128]);
/// ```
#[must_use]
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [u8; 3] {
    let h = wrap_hue(hsv[0]);
    let s = hsv[1].clamp(0.0, 1.0);
    let v = hsv[2].clamp(0.0, 1.0);

    let ramp = |t: f64| t / 60.0 * 255.0;

    let (r, g, b) = if h < 60.0 {
        (255.0, ramp(h), 0.0)
    } else if h < 120.0 {
        (ramp(120.0 - h), 255.0, 0.0)
    } else if h < 180.0 {
        (0.0, 255.0, ramp(h - 120.0))
    } else if h < 240.0 {
        (0.0, ramp(240.0 - h), 255.0)
    } else if h < 300.0 {
        (ramp(h - 240.0), 0.0, 255.0)
    } else {
        (255.0, 0.0, ramp(360.0 - h))
    };

    [r, g, b].map(|c| to_channel((c + (255.0 - c) * (1.0 - s)) * v))
}

/// Round and clamp a floating-point channel to 0-255. NaN maps to 0.
#[must_use]
pub fn to_channel(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    c.round().clamp(0.0, 255.0) as u8
}

// ============================================================================
// Array variants
// ============================================================================

/// Convert a buffer of RGB pixels to HSV, returning a new buffer.
#[must_use]
pub fn rgb_to_hsv_array(pixels: &[[u8; 3]]) -> Vec<[f64; 3]> {
    pixels.iter().map(|&p| rgb8_to_hsv(p)).collect()
}

/// Convert a buffer of HSV pixels to RGB, returning a new buffer.
#[must_use]
pub fn hsv_to_rgb_array(pixels: &[[f64; 3]]) -> Vec<[u8; 3]> {
    pixels.iter().map(|&p| hsv_to_rgb(p)).collect()
}

/// Convert RGB pixels to HSV into a caller-owned buffer.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the buffers differ in length.
pub fn rgb_to_hsv_into(src: &[[u8; 3]], dst: &mut [[f64; 3]]) -> Result<()> {
    check_lengths(src.len(), dst.len())?;
    for (out, &p) in dst.iter_mut().zip(src) {
        *out = rgb8_to_hsv(p);
    }
    Ok(())
}

/// Convert HSV pixels to RGB into a caller-owned buffer.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the buffers differ in length.
pub fn hsv_to_rgb_into(src: &[[f64; 3]], dst: &mut [[u8; 3]]) -> Result<()> {
    check_lengths(src.len(), dst.len())?;
    for (out, &p) in dst.iter_mut().zip(src) {
        *out = hsv_to_rgb(p);
    }
    Ok(())
}

fn check_lengths(src: usize, dst: usize) -> Result<()> {
    if src == dst {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "source has {src} pixels but destination has {dst}"
        )))
    }
}

// ============================================================================
// Hex
// ============================================================================

/// Format RGB as six uppercase hex digits.
#[must_use]
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Parse six hex digits, with an optional leading `#`.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] if the input is not exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(format!("expected six hex digits, got {hex:?}")));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| Error::InvalidColor(format!("{hex:?}: {e}")))
    };

    Ok([channel(0)?, channel(2)?, channel(4)?])
}

// ============================================================================
// RYB hue remap
// ============================================================================

/// Map an RGB-wheel hue onto the artist's RYB wheel.
#[must_use]
pub fn rgb_to_ryb_hue(h: f64) -> f64 {
    let h = wrap_hue(h);
    if h < 60.0 {
        h * 2.0
    } else if h < 120.0 {
        h + 60.0
    } else if h < 240.0 {
        h / 2.0 + 120.0
    } else {
        h
    }
}

/// Map an RYB-wheel hue back onto the RGB wheel.
#[must_use]
pub fn ryb_to_rgb_hue(h: f64) -> f64 {
    let h = wrap_hue(h);
    if h < 120.0 {
        h / 2.0
    } else if h < 180.0 {
        h - 60.0
    } else if h < 240.0 {
        (h - 120.0) * 2.0
    } else {
        h
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Every 8-bit color survives RGB -> HSV -> RGB exactly.
        #[test]
        fn prop_rgb_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(hsv_to_rgb(rgb8_to_hsv([r, g, b])), [r, g, b]);
        }

        /// In-range channels never hit the ambiguous branch.
        #[test]
        fn prop_in_range_never_ambiguous(
            r in 0.0f64..=255.0,
            g in 0.0f64..=255.0,
            b in 0.0f64..=255.0
        ) {
            let [h, s, v] = rgb_to_hsv([r, g, b]).unwrap();
            prop_assert!((0.0..360.0).contains(&h));
            prop_assert!((0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&v));
        }

        /// Channels above 255 are rejected rather than producing v > 1.
        #[test]
        fn prop_above_range_rejected(r in 255.001f64..1e6, g in 0.0f64..=255.0) {
            prop_assert!(rgb_to_hsv([g, r, g]).is_err());
        }

        /// The RYB remap is its own inverse up to float noise.
        #[test]
        fn prop_ryb_inverse(h in 0.0f64..360.0) {
            let back = ryb_to_rgb_hue(rgb_to_ryb_hue(h));
            prop_assert!(hue_offset(h, back).abs() < 1e-9);
        }

        #[test]
        fn prop_hue_offset_bounds(a in -720.0f64..720.0, b in -720.0f64..720.0) {
            let d = hue_offset(a, b);
            prop_assert!(d > -180.0 && d <= 180.0);
        }
    }
}
