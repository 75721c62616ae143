//! Harmony rules, hue wheels and synchronization modes.
//!
//! These are closed sets; every operation that depends on them matches
//! exhaustively.

use std::fmt;
use std::str::FromStr;

use crate::convert::{hue_offset, rgb_to_ryb_hue, ryb_to_rgb_hue, wrap_hue};
use crate::error::{Error, Result};

/// Geometric relationship a five-color set is kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HarmonyRule {
    /// Symmetric fan of neighboring hues around the anchor.
    #[default]
    Analogous,
    /// One hue, varied saturation and value.
    Monochromatic,
    /// Anchor plus two hues 120 degrees away.
    Triad,
    /// Four hues 90 degrees apart.
    Tetrad,
    /// Five hues 72 degrees apart.
    Pentad,
    /// Anchor hue and its opposite.
    Complementary,
    /// One hue and saturation at fixed values.
    Shades,
    /// No relationship; edits are not propagated.
    Custom,
}

impl HarmonyRule {
    /// All rules, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Analogous,
        Self::Monochromatic,
        Self::Triad,
        Self::Tetrad,
        Self::Pentad,
        Self::Complementary,
        Self::Shades,
        Self::Custom,
    ];

    /// Lowercase rule name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triad => "triad",
            Self::Tetrad => "tetrad",
            Self::Pentad => "pentad",
            Self::Complementary => "complementary",
            Self::Shades => "shades",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = Error;

    /// Parse a rule from its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.name() == lower)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown harmony rule {s:?}")))
    }
}

/// Color wheel used for hue arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSystem {
    /// Raw RGB hue.
    #[default]
    Rgb,
    /// Artist's red-yellow-blue wheel.
    Ryb,
}

impl ColorSystem {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Ryb => "ryb",
        }
    }

    /// Map an RGB hue onto this wheel.
    #[must_use]
    pub fn to_wheel(self, h: f64) -> f64 {
        match self {
            Self::Rgb => wrap_hue(h),
            Self::Ryb => rgb_to_ryb_hue(h),
        }
    }

    /// Map a hue on this wheel back to RGB.
    #[must_use]
    pub fn from_wheel(self, h: f64) -> f64 {
        match self {
            Self::Rgb => wrap_hue(h),
            Self::Ryb => ryb_to_rgb_hue(h),
        }
    }

    /// Rotate an RGB hue by `delta` degrees measured on this wheel.
    #[must_use]
    pub fn shift(self, h: f64, delta: f64) -> f64 {
        self.from_wheel(self.to_wheel(h) + delta)
    }

    /// Signed shortest distance from `from` to `to` on this wheel.
    #[must_use]
    pub fn offset(self, from: f64, to: f64) -> f64 {
        hue_offset(self.to_wheel(from), self.to_wheel(to))
    }
}

impl fmt::Display for ColorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "ryb" => Ok(Self::Ryb),
            _ => Err(Error::InvalidArgument(format!("unknown color system {s:?}"))),
        }
    }
}

/// How an edit to one slot propagates when on-screen cells are linked.
///
/// [`SyncMode::Rule`] defers to the harmony rule; every other mode overrides
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum SyncMode {
    /// Rule-defined propagation.
    #[default]
    Rule = 0,
    /// Others follow the saturation and value change; hues stay put.
    HueLocked = 1,
    /// Others follow the hue change only.
    HueOnly = 2,
    /// Others follow hue, saturation and value as one rotation.
    Rigid = 3,
    /// Others take the edited saturation and value.
    Broadcast = 4,
    /// Slots 1, 2 and 3, 4 form symmetric gradients around the anchor.
    Gradient = 5,
    /// Slot pairs 1/3 and 2/4 mirror each other about the anchor hue.
    Mirror = 6,
}

impl SyncMode {
    /// Numeric mode, 0-6.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SyncMode {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self> {
        match mode {
            0 => Ok(Self::Rule),
            1 => Ok(Self::HueLocked),
            2 => Ok(Self::HueOnly),
            3 => Ok(Self::Rigid),
            4 => Ok(Self::Broadcast),
            5 => Ok(Self::Gradient),
            6 => Ok(Self::Mirror),
            _ => Err(Error::InvalidArgument(format!("sync mode {mode} is outside 0..=6"))),
        }
    }
}

impl From<SyncMode> for u8 {
    fn from(mode: SyncMode) -> Self {
        mode.id()
    }
}
