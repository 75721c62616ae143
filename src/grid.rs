//! Palette grid generation.
//!
//! A grid is a `rows x cols` table of RGB cells derived from a [`ColorSet`].
//! Columns walk the five colors in display order (2, 1, 0, 3, 4); rows sweep
//! selected channels around each column's value. Grids are plain values and
//! are recomputed whenever the set changes.
//!
//! # Example
//!
//! ```
//! use chromaset::color_set::ColorSet;
//! use chromaset::config::ColorSetConfig;
//! use chromaset::grid::{generate, GridSpec};
//!
//! let set = ColorSet::new(&ColorSetConfig::new().with_seed(11)).unwrap();
//! let grid = generate(&set, &GridSpec::default()).unwrap();
//! assert_eq!(grid.cells().len(), grid.rows() * grid.cols());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::color_set::{ColorSet, SET_SIZE};
use crate::convert::lerp_hue;
use crate::error::{Error, Result};
use crate::scale::{HueScale, LinearScale, Scale};

/// A single color channel addressable by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Channel {
    R,
    G,
    B,
    H,
    S,
    V,
}

/// Space a grid is computed in, fixed by its channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSpace {
    /// 8-bit red, green, blue.
    Rgb,
    /// Hue, saturation, value.
    Hsv,
}

impl Channel {
    /// All channels.
    pub const ALL: [Self; 6] = [Self::R, Self::G, Self::B, Self::H, Self::S, Self::V];

    /// Space the channel belongs to.
    #[must_use]
    pub const fn space(self) -> ChannelSpace {
        match self {
            Self::R | Self::G | Self::B => ChannelSpace::Rgb,
            Self::H | Self::S | Self::V => ChannelSpace::Hsv,
        }
    }

    /// Position within its space's triple.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::R | Self::H => 0,
            Self::G | Self::S => 1,
            Self::B | Self::V => 2,
        }
    }

    /// Full extent of the channel: 255 for RGB, 360 for hue, 1 otherwise.
    #[must_use]
    pub const fn full_range(self) -> f64 {
        match self {
            Self::R | Self::G | Self::B => 255.0,
            Self::H => 360.0,
            Self::S | Self::V => 1.0,
        }
    }

    /// Lowercase single-letter name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::G => "g",
            Self::B => "b",
            Self::H => "h",
            Self::S => "s",
            Self::V => "v",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown channel {s:?}")))
    }
}

/// Shape of a palette grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Channels swept down the rows.
    pub row_channels: Vec<Channel>,
    /// Channels interpolated across the columns.
    pub col_channels: Vec<Channel>,
    /// Fraction of each row channel's full range covered by the sweep, in (0, 1].
    pub dimension: f64,
    /// How far non-column channels follow the column interpolation, in [0, 1].
    pub assist: f64,
    /// Sweep rows from high to low.
    pub reverse_rows: bool,
    /// Walk columns right to left.
    pub reverse_cols: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 9,
            row_channels: vec![Channel::V],
            col_channels: vec![Channel::H],
            dimension: 0.5,
            assist: 0.5,
            reverse_rows: false,
            reverse_cols: false,
        }
    }
}

impl GridSpec {
    /// Space implied by the channels; HSV when none are selected.
    #[must_use]
    pub fn space(&self) -> ChannelSpace {
        self.row_channels.iter().chain(&self.col_channels).next().map_or(ChannelSpace::Hsv, |c| c.space())
    }

    /// Check sizes, channel selection and fractions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either size is zero, channels
    /// mix RGB and HSV, a channel appears twice, `dimension` is outside
    /// (0, 1], or `assist` is outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidArgument(format!("grid size {}x{} must be non-zero", self.rows, self.cols)));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(Error::InvalidArgument(format!("grid size {}x{} overflows", self.rows, self.cols)));
        }

        let space = self.space();
        let mut seen = HashSet::new();
        for &channel in self.row_channels.iter().chain(&self.col_channels) {
            if channel.space() != space {
                return Err(Error::InvalidArgument(format!("channel {channel} mixes RGB and HSV channels")));
            }
            if !seen.insert(channel) {
                return Err(Error::InvalidArgument(format!("channel {channel} is selected more than once")));
            }
        }

        if !(self.dimension > 0.0 && self.dimension <= 1.0) {
            return Err(Error::InvalidArgument(format!("dimension {} is outside (0, 1]", self.dimension)));
        }
        if !(0.0..=1.0).contains(&self.assist) {
            return Err(Error::InvalidArgument(format!("assist {} is outside [0, 1]", self.assist)));
        }
        Ok(())
    }
}

/// Row-major table of RGB cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGrid {
    rows: usize,
    cols: usize,
    cells: Vec<[u8; 3]>,
}

impl ColorGrid {
    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[[u8; 3]] {
        &self.cells
    }

    /// Cell at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[[u8; 3]]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Cells as [`Color`] values, row-major.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().map(|&rgb| Color::from(rgb))
    }
}

/// Position of step `i` of `n` along [0, 1]; `single` when `n == 1`.
/// Reversal counts steps from the far end.
fn param(i: usize, n: usize, single: f64, reverse: bool) -> f64 {
    if n == 1 {
        return single;
    }
    let i = if reverse { n - 1 - i } else { i };
    i as f64 / (n - 1) as f64
}

fn channel_values(color: &Color, space: ChannelSpace) -> [f64; 3] {
    match space {
        ChannelSpace::Rgb => color.rgb().map(f64::from),
        ChannelSpace::Hsv => color.hsv(),
    }
}

/// Interpolated value of component `i` between two reference triples.
fn interpolate(space: ChannelSpace, i: usize, a: &[f64; 3], b: &[f64; 3], t: f64) -> f64 {
    if space == ChannelSpace::Hsv && i == 0 {
        HueScale::new(a[i], b[i]).scale(t)
    } else {
        LinearScale::unit((a[i], b[i])).scale(t)
    }
}

/// Column values at position `t` along the display-order chain.
fn column_value(spec: &GridSpec, space: ChannelSpace, refs: &[[f64; 3]; SET_SIZE], anchor: &[f64; 3], t: f64) -> [f64; 3] {
    let position = t * (SET_SIZE - 1) as f64;
    let segment = (position.floor() as usize).min(SET_SIZE - 2);
    let local = position - segment as f64;
    let (a, b) = (&refs[segment], &refs[segment + 1]);

    let mut value = *anchor;
    for (i, slot) in value.iter_mut().enumerate() {
        let along = interpolate(space, i, a, b, local);
        let selected = spec.col_channels.iter().any(|c| c.index() == i);
        *slot = if selected {
            along
        } else if space == ChannelSpace::Hsv && i == 0 {
            lerp_hue(anchor[i], along, spec.assist)
        } else {
            anchor[i] + (along - anchor[i]) * spec.assist
        };
    }
    value
}

/// Build the grid for `set`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `spec` fails [`GridSpec::validate`].
pub fn generate(set: &ColorSet, spec: &GridSpec) -> Result<ColorGrid> {
    spec.validate()?;
    let space = spec.space();
    let refs = set.display_order().map(|c| channel_values(&c, space));
    let anchor = channel_values(&set[0], space);

    let columns: Vec<[f64; 3]> = (0..spec.cols)
        .map(|col| column_value(spec, space, &refs, &anchor, param(col, spec.cols, 0.0, spec.reverse_cols)))
        .collect();

    let mut cells = Vec::with_capacity(spec.rows * spec.cols);
    for row in 0..spec.rows {
        let t = param(row, spec.rows, 0.5, spec.reverse_rows);
        for column in &columns {
            let mut value = *column;
            for &channel in &spec.row_channels {
                let i = channel.index();
                value[i] = LinearScale::centered(value[i], spec.dimension * channel.full_range()).scale(t);
            }
            let color = match space {
                ChannelSpace::Rgb => Color::from_rgb_f64(value),
                ChannelSpace::Hsv => Color::from_hsv(value, set.overflow())?,
            };
            cells.push(color.rgb());
        }
    }

    Ok(ColorGrid { rows: spec.rows, cols: spec.cols, cells })
}
