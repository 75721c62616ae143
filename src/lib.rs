//! # chromaset
//!
//! Color model and harmony-rule engine for palette editors.
//!
//! chromaset keeps five colors in a geometric relationship on the color
//! wheel. It creates a set from an anchor color, re-derives the other four
//! when one of them is edited, and expands the set into preview grids.
//!
//! ## Features
//!
//! - **Consistent colors**: RGB, HSV and hex views of a [`color::Color`] never disagree
//! - **Harmony rules**: analogous, monochromatic, triad, tetrad, pentad,
//!   complementary, shades and custom
//! - **Linked editing**: six sync modes override the rule's propagation
//! - **Two wheels**: hue arithmetic on the RGB wheel or the artist's RYB wheel
//! - **Extras**: CIE Lab and CMYK conversions, coarse color naming, palette grids
//!
//! ## Quick Start
//!
//! ```rust
//! use chromaset::prelude::*;
//!
//! let config = ColorSetConfig::new().with_seed(42).with_rule(HarmonyRule::Triad);
//! let mut set = ColorSet::new(&config)?;
//!
//! // Drag slot 1 to pure green; the triad follows.
//! set.modify(HarmonyRule::Triad, 1, Color::from_hex("#00FF00")?)?;
//! assert_eq!(set[1].h(), 120.0);
//!
//! let grid = generate(&set, &GridSpec::default())?;
//! assert_eq!(grid.rows(), 5);
//! # Ok::<(), chromaset::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize colors, backups, grids and configuration,
//!   and parse [`config::ColorSetConfig`] from YAML
//!
//! ## References
//!
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." *SIGGRAPH '78*.
//! - Itten, J. (1961). *The Art of Color*. Reinhold.
//! - CIE 15:2004. *Colorimetry*, 3rd edition.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Channel math moves between u8, usize and f64 constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Color Model
// ============================================================================

/// Scalar and array conversions between RGB, HSV, hex and the RYB hue wheel.
pub mod convert;

/// CIE XYZ/Lab and CMYK conversions.
pub mod lab;

/// The `Color` value type and its overflow policy.
pub mod color;

/// Coarse shade and hue-family naming.
pub mod sign;

// ============================================================================
// Harmony Engine
// ============================================================================

/// Harmony rules, hue wheels and sync modes.
pub mod harmony;

/// Configuration for color sets.
pub mod config;

/// The five-color harmony engine.
pub mod color_set;

// ============================================================================
// Palette Grids
// ============================================================================

/// Scale functions for channel sweeps.
pub mod scale;

/// Palette grid generation.
pub mod grid;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chromaset operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use chromaset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, ColorExport, OverflowPolicy};
    pub use crate::color_set::{ColorSet, ColorSetBackup, DISPLAY_ORDER, SET_SIZE};
    pub use crate::config::ColorSetConfig;
    pub use crate::error::{Error, Result};
    pub use crate::grid::{generate, Channel, ColorGrid, GridSpec};
    pub use crate::harmony::{ColorSystem, HarmonyRule, SyncMode};
    pub use crate::lab::{Illuminant, Observer, WhiteRef};
    pub use crate::scale::{HueScale, LinearScale, Scale};
    pub use crate::sign::{HueFamily, Shade, Sign};
}

// ============================================================================
// Tests
// ============================================================================
