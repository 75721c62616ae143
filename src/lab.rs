//! CIE Lab and CMYK conversions.
//!
//! Lab goes through CIE XYZ with sRGB companding. The white reference defaults
//! to D65 with the 2 degree observer and can be switched to any of the 20
//! tabulated illuminants for either observer.
//!
//! # References
//!
//! - IEC 61966-2-1:1999. *Multimedia systems and equipment - Colour measurement
//!   and management - Default RGB colour space - sRGB.*
//! - CIE 15:2004. *Colorimetry*, 3rd edition.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const EPSILON: f64 = 0.008_856;
const KAPPA_SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// Standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    #[default]
    D65,
    D75,
    E,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// Standard observer field of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observer {
    /// CIE 1931 2 degree observer.
    #[default]
    Deg2,
    /// CIE 1964 10 degree observer.
    Deg10,
}

/// Tristimulus white points (Y = 100), indexed by illuminant then observer.
const WHITE_POINTS: [[[f64; 3]; 2]; 20] = [
    [[109.850, 100.0, 35.585], [111.144, 100.0, 35.200]],
    [[99.0927, 100.0, 85.313], [99.178, 100.0, 84.3493]],
    [[98.074, 100.0, 118.232], [97.285, 100.0, 116.145]],
    [[96.422, 100.0, 82.521], [96.720, 100.0, 81.427]],
    [[95.682, 100.0, 92.149], [95.799, 100.0, 90.926]],
    [[95.047, 100.0, 108.883], [94.811, 100.0, 107.304]],
    [[94.972, 100.0, 122.638], [94.416, 100.0, 120.641]],
    [[100.0, 100.0, 100.0], [100.0, 100.0, 100.0]],
    [[92.834, 100.0, 103.665], [94.791, 100.0, 103.191]],
    [[99.187, 100.0, 67.395], [103.280, 100.0, 69.026]],
    [[103.754, 100.0, 49.861], [108.968, 100.0, 51.965]],
    [[109.147, 100.0, 38.813], [114.961, 100.0, 40.963]],
    [[90.872, 100.0, 98.723], [93.369, 100.0, 98.636]],
    [[97.309, 100.0, 60.191], [102.148, 100.0, 62.074]],
    [[95.044, 100.0, 108.755], [95.792, 100.0, 107.687]],
    [[96.413, 100.0, 82.333], [97.115, 100.0, 81.135]],
    [[100.365, 100.0, 67.868], [102.116, 100.0, 67.826]],
    [[96.174, 100.0, 81.712], [99.001, 100.0, 83.134]],
    [[100.966, 100.0, 64.370], [103.866, 100.0, 65.627]],
    [[108.046, 100.0, 39.228], [111.428, 100.0, 40.353]],
];

impl Illuminant {
    /// All tabulated illuminants.
    pub const ALL: [Self; 20] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
    ];

    /// Illuminant name, e.g. "D65".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|i| i.name() == upper)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown illuminant {s:?}")))
    }
}

/// White reference for Lab conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhiteRef {
    /// Illuminant.
    pub illuminant: Illuminant,
    /// Observer.
    pub observer: Observer,
}

impl WhiteRef {
    /// D65 illuminant, 2 degree observer.
    pub const D65: Self = Self { illuminant: Illuminant::D65, observer: Observer::Deg2 };

    /// Create a white reference.
    #[must_use]
    pub const fn new(illuminant: Illuminant, observer: Observer) -> Self {
        Self { illuminant, observer }
    }

    /// XYZ tristimulus values of this white, with Y = 100.
    #[must_use]
    pub const fn xyz(self) -> [f64; 3] {
        let observer = match self.observer {
            Observer::Deg2 => 0,
            Observer::Deg10 => 1,
        };
        WHITE_POINTS[self.illuminant as usize][observer]
    }
}

// ============================================================================
// sRGB <-> XYZ
// ============================================================================

fn expand(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    let linear = if c > 0.040_45 { ((c + 0.055) / 1.055).powf(2.4) } else { c / 12.92 };
    linear * 100.0
}

fn compress(c: f64) -> f64 {
    let c = c / 100.0;
    let encoded = if c > 0.003_130_8 { 1.055 * c.powf(1.0 / 2.4) - 0.055 } else { 12.92 * c };
    encoded * 255.0
}

/// Convert 8-bit sRGB to CIE XYZ (Y of white = 100).
#[must_use]
pub fn rgb_to_xyz(rgb: [u8; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(expand);
    [
        r * 0.4124 + g * 0.3576 + b * 0.1805,
        r * 0.2126 + g * 0.7152 + b * 0.0722,
        r * 0.0193 + g * 0.1192 + b * 0.9505,
    ]
}

/// Convert CIE XYZ to unclamped floating-point sRGB channels (0-255).
#[must_use]
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    [
        compress(x * 3.2406 + y * -1.5372 + z * -0.4986),
        compress(x * -0.9689 + y * 1.8758 + z * 0.0415),
        compress(x * 0.0557 + y * -0.2040 + z * 1.0570),
    ]
}

// ============================================================================
// XYZ <-> Lab
// ============================================================================

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cube = f.powi(3);
    if cube > EPSILON {
        cube
    } else {
        (f - OFFSET) / KAPPA_SLOPE
    }
}

fn clamp_lab(lab: [f64; 3]) -> [f64; 3] {
    [lab[0].clamp(0.0, 100.0), lab[1].clamp(-128.0, 128.0), lab[2].clamp(-128.0, 128.0)]
}

/// Convert 8-bit sRGB to CIE Lab against `white`.
///
/// L is clamped to [0, 100] and a, b to [-128, 128].
#[must_use]
pub fn rgb_to_lab(rgb: [u8; 3], white: WhiteRef) -> [f64; 3] {
    let [x, y, z] = rgb_to_xyz(rgb);
    let [xn, yn, zn] = white.xyz();
    let (fx, fy, fz) = (lab_f(x / xn), lab_f(y / yn), lab_f(z / zn));
    clamp_lab([116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)])
}

/// Convert CIE Lab against `white` to unclamped floating-point sRGB channels.
///
/// The Lab input is clamped to the same ranges [`rgb_to_lab`] produces.
#[must_use]
pub fn lab_to_rgb(lab: [f64; 3], white: WhiteRef) -> [f64; 3] {
    let [l, a, b] = clamp_lab(lab);
    let [xn, yn, zn] = white.xyz();
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    xyz_to_rgb([lab_f_inv(fx) * xn, lab_f_inv(fy) * yn, lab_f_inv(fz) * zn])
}

// ============================================================================
// CMYK
// ============================================================================

/// Convert 8-bit RGB to CMYK components in [0, 1].
#[must_use]
pub fn rgb_to_cmyk(rgb: [u8; 3]) -> [f64; 4] {
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    let ink = |c: f64| ((1.0 - c - k) / (1.0 - k)).clamp(0.0, 1.0);
    [ink(r), ink(g), ink(b), k]
}

/// Convert CMYK (each clamped to [0, 1]) to floating-point RGB channels.
#[must_use]
pub fn cmyk_to_rgb(cmyk: [f64; 4]) -> [f64; 3] {
    let [c, m, y, k] = cmyk.map(|x| x.clamp(0.0, 1.0));
    [c, m, y].map(|ink| 255.0 * (1.0 - ink) * (1.0 - k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3], tol: f64) -> bool {
        a.iter().zip(&b).all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_white_is_neutral() {
        let lab = rgb_to_lab([255, 255, 255], WhiteRef::D65);
        assert!(close(lab, [100.0, 0.0, 0.0], 0.05), "{lab:?}");
    }

    #[test]
    fn test_black_is_zero() {
        let lab = rgb_to_lab([0, 0, 0], WhiteRef::D65);
        assert!(close(lab, [0.0, 0.0, 0.0], 1e-9), "{lab:?}");
    }

    #[test]
    fn test_red_reference_values() {
        let lab = rgb_to_lab([255, 0, 0], WhiteRef::default());
        assert!(close(lab, [53.24, 80.09, 67.20], 0.05), "{lab:?}");
    }

    #[test]
    fn test_white_point_lookup() {
        let d50 = WhiteRef::new(Illuminant::D50, Observer::Deg10).xyz();
        assert_eq!(d50, [96.720, 100.0, 81.427]);
        assert_eq!(WhiteRef::new(Illuminant::F12, Observer::Deg2).xyz(), [108.046, 100.0, 39.228]);
    }

    #[test]
    fn test_other_white_shifts_chroma() {
        let d65 = rgb_to_lab([200, 200, 200], WhiteRef::D65);
        let a = rgb_to_lab([200, 200, 200], WhiteRef::new(Illuminant::A, Observer::Deg2));
        assert!((d65[0] - a[0]).abs() < 1e-9);
        assert!(a[2] < -20.0, "grey reads blue against an incandescent white: {a:?}");
    }

    #[test]
    fn test_lab_round_trip() {
        for rgb in [[255u8, 0, 0], [12, 200, 99], [128, 128, 128], [3, 7, 250]] {
            let back = lab_to_rgb(rgb_to_lab(rgb, WhiteRef::D65), WhiteRef::D65);
            for (orig, got) in rgb.iter().zip(back) {
                assert!((f64::from(*orig) - got).abs() < 0.5, "{rgb:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_lab_input_clamped() {
        let over = lab_to_rgb([150.0, 0.0, 0.0], WhiteRef::D65);
        let max = lab_to_rgb([100.0, 0.0, 0.0], WhiteRef::D65);
        assert_eq!(over, max);
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(rgb_to_cmyk([0, 0, 0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_cmyk([255, 0, 0]), [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(cmyk_to_rgb([0.0, 1.0, 1.0, 0.0]), [255.0, 0.0, 0.0]);
        assert_eq!(cmyk_to_rgb([2.0, -1.0, 0.0, 0.5]), [0.0, 127.5, 127.5]);
    }

    #[test]
    fn test_illuminant_parse() {
        assert_eq!("d50".parse::<Illuminant>().unwrap(), Illuminant::D50);
        assert_eq!(Illuminant::F11.to_string(), "F11");
        assert!("D60".parse::<Illuminant>().is_err());
    }
}
