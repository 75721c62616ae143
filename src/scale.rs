//! Scale functions for channel sweeps.
//!
//! Scales map a parameter `t` in [0, 1] onto a channel value. The palette
//! grid uses them to interpolate between reference colors and to sweep a
//! channel around a center value.

use crate::convert::{lerp_hue, wrap_hue};

/// Trait for scale functions that map a sweep parameter to a channel value.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;
}

/// Linear scale from the unit interval onto `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    from: f64,
    to: f64,
}

impl LinearScale {
    /// Scale from the unit interval onto `range`.
    #[must_use]
    pub const fn unit(range: (f64, f64)) -> Self {
        Self { from: range.0, to: range.1 }
    }

    /// Unit scale spanning `span` centered on `center`: 0.5 maps to `center`.
    ///
    /// ```
    /// use chromaset::scale::{LinearScale, Scale};
    ///
    /// let sweep = LinearScale::centered(100.0, 50.0);
    /// assert_eq!(sweep.scale(0.0), 75.0);
    /// assert_eq!(sweep.scale(0.5), 100.0);
    /// ```
    #[must_use]
    pub fn centered(center: f64, span: f64) -> Self {
        let half = span / 2.0;
        Self::unit((center - half, center + half))
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, t: f64) -> f64 {
        self.from + t * (self.to - self.from)
    }
}

/// Hue scale over the unit interval, following the shorter arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueScale {
    from: f64,
    to: f64,
}

impl HueScale {
    /// Create a hue scale from `from` to `to`, in degrees.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from: wrap_hue(from), to: wrap_hue(to) }
    }
}

impl Scale<f64, f64> for HueScale {
    fn scale(&self, t: f64) -> f64 {
        lerp_hue(self.from, self.to, t)
    }
}
