//! The [`Color`] value type and its overflow policy.
//!
//! A `Color` keeps RGB, HSV and hex views consistent: every setter recomputes
//! the other representations. HSV is the authoritative view when a color is
//! set through HSV (the RGB view is then derived), and is derived from RGB
//! otherwise.
//!
//! # References
//!
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." *SIGGRAPH '78*, 12-19.

use std::fmt;
use std::str::FromStr;

use crate::convert::{self, hue_offset, normalize_hue, round5};
use crate::error::{Error, Result};
use crate::lab::{self, WhiteRef};
use crate::sign::Sign;

/// How out-of-range saturation and value are brought back into [0, 1].
///
/// Hue always wraps modulo 360 regardless of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Clamp to the nearest bound.
    Cutoff,
    /// Reflect off the bounds like a triangle wave.
    #[default]
    Return,
    /// Wrap modulo 1.
    Repeat,
}

impl OverflowPolicy {
    /// All policies, in declaration order.
    pub const ALL: [Self; 3] = [Self::Cutoff, Self::Return, Self::Repeat];

    /// Lowercase policy name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cutoff => "cutoff",
            Self::Return => "return",
            Self::Repeat => "repeat",
        }
    }

    /// Normalize a saturation or value component.
    ///
    /// Values already inside [0, 1] are returned unchanged.
    ///
    /// ```
    /// use chromaset::color::OverflowPolicy;
    ///
    /// assert_eq!(OverflowPolicy::Cutoff.apply(1.5), 1.0);
    /// assert_eq!(OverflowPolicy::Repeat.apply(1.5), 0.5);
    /// assert_eq!(OverflowPolicy::Return.apply(1.5), 0.5);
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        if (0.0..=1.0).contains(&x) {
            return x;
        }
        match self {
            Self::Cutoff => x.clamp(0.0, 1.0),
            Self::Repeat => x.rem_euclid(1.0),
            Self::Return => {
                let frac = x.rem_euclid(1.0);
                if x.floor().rem_euclid(2.0) == 0.0 {
                    frac
                } else {
                    1.0 - frac
                }
            }
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OverflowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown overflow policy {s:?}")))
    }
}

/// Wrap h, apply the overflow policy to s and v, and round all three.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] if a component is not finite.
pub fn normalize_hsv(hsv: [f64; 3], overflow: OverflowPolicy) -> Result<[f64; 3]> {
    if hsv.iter().any(|c| !c.is_finite()) {
        return Err(Error::InvalidColor(format!("non-finite HSV component in {hsv:?}")));
    }
    let [h, s, v] = hsv;
    Ok([normalize_hue(h), round5(overflow.apply(s)), round5(overflow.apply(v))])
}

/// Plain snapshot of a color, as written by palette-file encoders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorExport {
    /// 8-bit RGB channels.
    pub rgb: [u8; 3],
    /// Hue in degrees, saturation and value in [0, 1].
    pub hsv: [f64; 3],
    /// Six uppercase hex digits.
    pub hex_code: String,
}

/// A color with mutually consistent RGB, HSV and hex representations.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "ColorExport", try_from = "ColorExport"))]
pub struct Color {
    rgb: [u8; 3],
    hsv: [f64; 3],
    overflow: OverflowPolicy,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self { rgb: [0, 0, 0], hsv: [0.0, 0.0, 0.0], overflow: OverflowPolicy::Return };
    /// Opaque white.
    pub const WHITE: Self =
        Self { rgb: [255, 255, 255], hsv: [0.0, 0.0, 1.0], overflow: OverflowPolicy::Return };

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rgb = [r, g, b];
        Self { rgb, hsv: convert::rgb8_to_hsv(rgb), overflow: OverflowPolicy::default() }
    }

    /// Create a color from floating-point channels, clamping each to
    /// [0, 255] and rounding to the nearest integer. NaN becomes 0.
    #[must_use]
    pub fn from_rgb_f64(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb.map(convert::to_channel);
        Self::from_rgb(r, g, b)
    }

    /// Create a color from HSV, normalizing s and v with `overflow`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if a component is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use chromaset::color::{Color, OverflowPolicy};
    ///
    /// let c = Color::from_hsv([-30.0, 1.5, 0.5], OverflowPolicy::Cutoff).unwrap();
    /// assert_eq!(c.hsv(), [330.0, 1.0, 0.5]);
    /// ```
    pub fn from_hsv(hsv: [f64; 3], overflow: OverflowPolicy) -> Result<Self> {
        let hsv = normalize_hsv(hsv, overflow)?;
        Ok(Self { rgb: convert::hsv_to_rgb(hsv), hsv, overflow })
    }

    /// Create a color from six hex digits, with an optional leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let [r, g, b] = convert::hex_to_rgb(hex)?;
        Ok(Self::from_rgb(r, g, b))
    }

    /// Create a color from CIE Lab coordinates against a white reference.
    ///
    /// L is clamped to [0, 100] and a, b to [-128, 128]; out-of-gamut
    /// results are clamped to the RGB cube.
    #[must_use]
    pub fn from_lab(lab: [f64; 3], white: WhiteRef) -> Self {
        Self::from_rgb_f64(lab::lab_to_rgb(lab, white))
    }

    /// Create a color from CMYK components, each clamped to [0, 1].
    #[must_use]
    pub fn from_cmyk(cmyk: [f64; 4]) -> Self {
        Self::from_rgb_f64(lab::cmyk_to_rgb(cmyk))
    }

    /// Return this color with a different overflow policy.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Red channel.
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.rgb[0]
    }

    /// Green channel.
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.rgb[1]
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.rgb[2]
    }

    /// Hue in degrees, [0, 360).
    #[must_use]
    pub const fn h(&self) -> f64 {
        self.hsv[0]
    }

    /// Saturation, [0, 1].
    #[must_use]
    pub const fn s(&self) -> f64 {
        self.hsv[1]
    }

    /// Value, [0, 1].
    #[must_use]
    pub const fn v(&self) -> f64 {
        self.hsv[2]
    }

    /// RGB channels.
    #[must_use]
    pub const fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// HSV components.
    #[must_use]
    pub const fn hsv(&self) -> [f64; 3] {
        self.hsv
    }

    /// Six uppercase hex digits, without a `#`.
    #[must_use]
    pub fn hex(&self) -> String {
        convert::rgb_to_hex(self.rgb)
    }

    /// Overflow policy used by the HSV setters.
    #[must_use]
    pub const fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Replace the RGB channels.
    pub fn set_rgb(&mut self, rgb: [u8; 3]) {
        self.rgb = rgb;
        self.hsv = convert::rgb8_to_hsv(rgb);
    }

    /// Replace the red channel.
    pub fn set_r(&mut self, r: u8) {
        self.set_rgb([r, self.rgb[1], self.rgb[2]]);
    }

    /// Replace the green channel.
    pub fn set_g(&mut self, g: u8) {
        self.set_rgb([self.rgb[0], g, self.rgb[2]]);
    }

    /// Replace the blue channel.
    pub fn set_b(&mut self, b: u8) {
        self.set_rgb([self.rgb[0], self.rgb[1], b]);
    }

    /// Replace the HSV components using this color's overflow policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] (leaving the color unchanged) if a
    /// component is not finite.
    pub fn set_hsv(&mut self, hsv: [f64; 3]) -> Result<()> {
        let hsv = normalize_hsv(hsv, self.overflow)?;
        self.hsv = hsv;
        self.rgb = convert::hsv_to_rgb(hsv);
        Ok(())
    }

    /// Replace the hue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `h` is not finite.
    pub fn set_h(&mut self, h: f64) -> Result<()> {
        self.set_hsv([h, self.hsv[1], self.hsv[2]])
    }

    /// Replace the saturation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `s` is not finite.
    pub fn set_s(&mut self, s: f64) -> Result<()> {
        self.set_hsv([self.hsv[0], s, self.hsv[2]])
    }

    /// Replace the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `v` is not finite.
    pub fn set_v(&mut self, v: f64) -> Result<()> {
        self.set_hsv([self.hsv[0], self.hsv[1], v])
    }

    /// Replace the color from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] (leaving the color unchanged) if the
    /// string is not six hex digits.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let rgb = convert::hex_to_rgb(hex)?;
        self.set_rgb(rgb);
        Ok(())
    }

    /// Change the overflow policy used by later HSV sets.
    pub fn set_overflow(&mut self, overflow: OverflowPolicy) {
        self.overflow = overflow;
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    /// Signed shortest angular distance from this hue to `other_hue`,
    /// in (-180, 180].
    #[must_use]
    pub fn ref_hue(&self, other_hue: f64) -> f64 {
        hue_offset(self.hsv[0], other_hue)
    }

    /// CIE Lab coordinates against a white reference.
    #[must_use]
    pub fn to_lab(&self, white: WhiteRef) -> [f64; 3] {
        lab::rgb_to_lab(self.rgb, white)
    }

    /// CMYK components in [0, 1].
    #[must_use]
    pub fn to_cmyk(&self) -> [f64; 4] {
        lab::rgb_to_cmyk(self.rgb)
    }

    /// Coarse shade and hue classification.
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::classify(self.hsv)
    }

    /// Human-readable name such as "Dark Red".
    #[must_use]
    pub fn describe(&self) -> String {
        self.sign().name()
    }

    /// Snapshot for palette-file encoders.
    #[must_use]
    pub fn export(&self) -> ColorExport {
        ColorExport { rgb: self.rgb, hsv: self.hsv, hex_code: self.hex() }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.hsv == other.hsv
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for ColorExport {
    fn from(color: Color) -> Self {
        color.export()
    }
}

impl TryFrom<ColorExport> for Color {
    type Error = Error;

    fn try_from(export: ColorExport) -> Result<Self> {
        Self::from_hsv(export.hsv, OverflowPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK, Color::from_rgb(0, 0, 0));
        assert_eq!(Color::WHITE, Color::from_rgb(255, 255, 255));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_from_hex() {
        let red = Color::from_hex("FF0000").unwrap();
        assert_eq!(red.rgb(), [255, 0, 0]);
        assert_eq!(red.hsv(), [0.0, 1.0, 1.0]);
        assert_eq!(red.hex(), "FF0000");
        assert_eq!(red.to_string(), "#FF0000");
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(Color::from_hex("F00"), Err(Error::InvalidColor(_))));
        assert!(matches!("XYZXYZ".parse::<Color>(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_from_rgb_f64_clamps_and_rounds() {
        let c = Color::from_rgb_f64([300.0, -12.0, 127.5]);
        assert_eq!(c.rgb(), [255, 0, 128]);
        let nan = Color::from_rgb_f64([f64::NAN, 10.4, 10.6]);
        assert_eq!(nan.rgb(), [0, 10, 11]);
    }

    #[test]
    fn test_overflow_examples() {
        let cut = Color::from_hsv([0.0, 1.5, -0.3], OverflowPolicy::Cutoff).unwrap();
        assert_eq!((cut.s(), cut.v()), (1.0, 0.0));

        let rep = Color::from_hsv([0.0, 1.5, -0.3], OverflowPolicy::Repeat).unwrap();
        assert_eq!((rep.s(), rep.v()), (0.5, 0.7));

        let ret = Color::from_hsv([0.0, 1.5, -0.3], OverflowPolicy::Return).unwrap();
        assert_eq!((ret.s(), ret.v()), (0.5, 0.3));
    }

    #[test]
    fn test_return_policy_even_and_odd_periods() {
        assert_eq!(OverflowPolicy::Return.apply(2.25), 0.25);
        assert_eq!(OverflowPolicy::Return.apply(-1.25), 0.75);
        assert_eq!(OverflowPolicy::Return.apply(1.0), 1.0);
        assert_eq!(OverflowPolicy::Repeat.apply(1.0), 1.0);
    }

    #[test]
    fn test_from_hsv_rejects_non_finite() {
        let err = Color::from_hsv([f64::NAN, 0.5, 0.5], OverflowPolicy::Cutoff);
        assert!(matches!(err, Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_hue_wraps() {
        let c = Color::from_hsv([725.0, 1.0, 1.0], OverflowPolicy::Cutoff).unwrap();
        assert_eq!(c.h(), 5.0);
        let c = Color::from_hsv([-0.5, 1.0, 1.0], OverflowPolicy::Cutoff).unwrap();
        assert_eq!(c.h(), 359.5);
    }

    #[test]
    fn test_hsv_rounded_to_five_places() {
        let c = Color::from_hsv([12.3456789, 0.1234567, 0.9999999], OverflowPolicy::Cutoff).unwrap();
        assert_eq!(c.hsv(), [12.34568, 0.12346, 1.0]);
    }

    #[test]
    fn test_setters_keep_views_consistent() {
        let mut c = Color::from_rgb(255, 0, 0);
        c.set_h(120.0).unwrap();
        assert_eq!(c.rgb(), [0, 255, 0]);
        assert_eq!(c.hex(), "00FF00");

        c.set_b(255);
        assert_eq!(c.h(), 180.0);

        c.set_v(0.0).unwrap();
        assert_eq!(c.rgb(), [0, 0, 0]);

        c.set_hex("#0000FF").unwrap();
        assert_eq!(c.h(), 240.0);
    }

    #[test]
    fn test_failed_set_leaves_color_unchanged() {
        let mut c = Color::from_rgb(10, 20, 30);
        let before = c;
        assert!(c.set_hex("nope").is_err());
        assert!(c.set_s(f64::INFINITY).is_err());
        assert_eq!(c, before);
    }

    #[test]
    fn test_setter_uses_color_overflow() {
        let mut c = Color::from_rgb(255, 0, 0).with_overflow(OverflowPolicy::Repeat);
        c.set_v(1.25).unwrap();
        assert_eq!(c.v(), 0.25);
    }

    #[test]
    fn test_ref_hue() {
        let c = Color::from_hsv([350.0, 1.0, 1.0], OverflowPolicy::Cutoff).unwrap();
        assert_eq!(c.ref_hue(10.0), 20.0);
        assert_eq!(c.ref_hue(300.0), -50.0);
    }

    #[test]
    fn test_export() {
        let e = Color::from_rgb(0, 255, 0).export();
        assert_eq!(e.rgb, [0, 255, 0]);
        assert_eq!(e.hsv, [120.0, 1.0, 1.0]);
        assert_eq!(e.hex_code, "00FF00");
    }

    #[test]
    fn test_overflow_parse() {
        assert_eq!("Cutoff".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Cutoff);
        assert!(matches!("clip".parse::<OverflowPolicy>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_describe() {
        let c = Color::from_hsv([10.0, 0.6, 0.3], OverflowPolicy::Cutoff).unwrap();
        assert_eq!(c.describe(), "Dark Red");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_via_export() {
        let c = Color::from_hex("3366CC").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"hex_code\":\"3366CC\""));
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
