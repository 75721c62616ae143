//! Coarse color naming.
//!
//! [`Sign::classify`] sorts an HSV triple into one of ten shades and one of
//! eight hue families using a fixed threshold table, giving names such as
//! "Dark Red" or "Pale Cyan" for descriptions and exports.

use std::fmt;

/// Shade bucket, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shade {
    /// Nearly no light at all.
    Deep = 0,
    /// Nearly no saturation at full light.
    Snow = 1,
    /// Very low value.
    Heavy = 2,
    /// Muted.
    Dull = 3,
    /// Desaturated.
    Grey = 4,
    /// Light and weakly saturated.
    Pale = 5,
    /// Light and moderately saturated.
    Light = 6,
    /// Strongly saturated, moderately bright.
    Bright = 7,
    /// Low value, strongly saturated.
    Dark = 8,
    /// Strongly saturated and bright.
    Vivid = 9,
}

impl Shade {
    /// Numeric id, 0-9.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deep => "Deep",
            Self::Snow => "Snow",
            Self::Heavy => "Heavy",
            Self::Dull => "Dull",
            Self::Grey => "Grey",
            Self::Pale => "Pale",
            Self::Light => "Light",
            Self::Bright => "Bright",
            Self::Dark => "Dark",
            Self::Vivid => "Vivid",
        }
    }
}

/// Hue family, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum HueFamily {
    Black = 0,
    White = 1,
    Red = 2,
    Yellow = 3,
    Green = 4,
    Cyan = 5,
    Blue = 6,
    Magenta = 7,
}

impl HueFamily {
    const WHEEL: [Self; 6] = [Self::Red, Self::Yellow, Self::Green, Self::Cyan, Self::Blue, Self::Magenta];

    /// Numeric id, 0-7.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Blue => "Blue",
            Self::Magenta => "Magenta",
        }
    }

    /// Family of a chromatic hue: `((floor(h) + 30) div 60) mod 6`, offset
    /// past black and white.
    #[must_use]
    pub fn from_hue(h: f64) -> Self {
        let sector = ((h.floor() as i64 + 30).div_euclid(60)).rem_euclid(6);
        Self::WHEEL[sector as usize]
    }
}

/// Shade and hue family of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sign {
    /// Shade bucket.
    pub shade: Shade,
    /// Hue family.
    pub hue: HueFamily,
}

impl Sign {
    /// Classify an HSV triple (h in degrees, s and v in [0, 1]).
    ///
    /// ```
    /// use chromaset::sign::{HueFamily, Shade, Sign};
    ///
    /// let sign = Sign::classify([200.0, 0.2, 0.9]);
    /// assert_eq!(sign.shade, Shade::Pale);
    /// assert_eq!(sign.hue, HueFamily::Cyan);
    /// ```
    #[must_use]
    pub fn classify(hsv: [f64; 3]) -> Self {
        let [h, s, v] = hsv;

        if v <= 0.08 {
            return Self { shade: Shade::Deep, hue: HueFamily::Black };
        }
        if s <= 0.08 && v >= 0.92 {
            return Self { shade: Shade::Snow, hue: HueFamily::White };
        }

        let shade = if s < 0.12 {
            Shade::Grey
        } else if v < 0.25 {
            Shade::Heavy
        } else if v < 0.45 {
            if s >= 0.5 {
                Shade::Dark
            } else {
                Shade::Dull
            }
        } else if s < 0.35 {
            if v >= 0.75 {
                Shade::Pale
            } else {
                Shade::Dull
            }
        } else if s < 0.65 {
            if v >= 0.75 {
                Shade::Light
            } else {
                Shade::Dull
            }
        } else if v >= 0.85 {
            Shade::Vivid
        } else {
            Shade::Bright
        };

        Self { shade, hue: HueFamily::from_hue(h) }
    }

    /// `(shade_id, hue_id)`.
    #[must_use]
    pub const fn ids(self) -> (u8, u8) {
        (self.shade.id(), self.hue.id())
    }

    /// Display name, e.g. "Dark Red".
    #[must_use]
    pub fn name(self) -> String {
        format!("{} {}", self.shade.name(), self.hue.name())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shade.name(), self.hue.name())
    }
}

/// Classify an HSV triple into `(shade_id, hue_id)`.
#[must_use]
pub fn sign(hsv: [f64; 3]) -> (u8, u8) {
    Sign::classify(hsv).ids()
}
