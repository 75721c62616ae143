//! Explicit configuration for [`ColorSet`](crate::color_set::ColorSet).
//!
//! Hosts own the configuration and pass it in; the engine never reads ambient
//! settings. With the `serde` feature the configuration can be parsed from
//! YAML.

use crate::color::OverflowPolicy;
use crate::error::{Error, Result};
use crate::harmony::{ColorSystem, HarmonyRule, SyncMode};

/// Settings for a color set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorSetConfig {
    /// Hue range, in degrees, for randomly initialized colors.
    pub h_range: (f64, f64),
    /// Saturation range for randomly initialized colors.
    pub s_range: (f64, f64),
    /// Value range for randomly initialized colors.
    pub v_range: (f64, f64),
    /// Overflow policy applied to every color of the set.
    pub overflow: OverflowPolicy,
    /// Wheel used for hue arithmetic.
    pub color_system: ColorSystem,
    /// Propagation override for linked editing.
    pub sync_mode: SyncMode,
    /// Rule applied right after initialization.
    pub rule: HarmonyRule,
    /// Seed for the random source; `None` seeds from the environment.
    pub seed: Option<u64>,
}

impl Default for ColorSetConfig {
    fn default() -> Self {
        Self {
            h_range: (0.0, 360.0),
            s_range: (0.6, 1.0),
            v_range: (0.6, 1.0),
            overflow: OverflowPolicy::default(),
            color_system: ColorSystem::default(),
            sync_mode: SyncMode::default(),
            rule: HarmonyRule::default(),
            seed: None,
        }
    }
}

/// Check `0 <= lo <= hi <= max`.
pub(crate) fn check_range(name: &str, range: (f64, f64), max: f64) -> Result<()> {
    let (lo, hi) = range;
    if lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi && hi <= max {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} range ({lo}, {hi}) must satisfy 0 <= lo <= hi <= {max}"
        )))
    }
}

impl ColorSetConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this configuration with a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Return this configuration with a different initial rule.
    #[must_use]
    pub const fn with_rule(mut self, rule: HarmonyRule) -> Self {
        self.rule = rule;
        self
    }

    /// Validate the HSV ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a range is inverted, negative,
    /// or exceeds 360 (hue) or 1 (saturation, value).
    pub fn validate(&self) -> Result<()> {
        check_range("hue", self.h_range, 360.0)?;
        check_range("saturation", self.s_range, 1.0)?;
        check_range("value", self.v_range, 1.0)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the line number if parsing fails,
    /// or [`Error::InvalidArgument`] if the parsed ranges are invalid.
    #[cfg(feature = "serde")]
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ColorSetConfig::new();
        assert_eq!(config.h_range, (0.0, 360.0));
        assert_eq!(config.overflow, OverflowPolicy::Return);
        assert_eq!(config.rule, HarmonyRule::Analogous);
        assert_eq!(config.sync_mode, SyncMode::Rule);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = ColorSetConfig::new();
        config.s_range = (0.8, 0.2);
        assert!(config.validate().is_err());

        let mut config = ColorSetConfig::new();
        config.h_range = (0.0, 400.0);
        assert!(config.validate().is_err());

        let mut config = ColorSetConfig::new();
        config.v_range = (f64::NAN, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = ColorSetConfig::new().with_seed(7).with_rule(HarmonyRule::Shades);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rule, HarmonyRule::Shades);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
h_range: [30.0, 90.0]
s_range: [0.2, 0.4]
overflow: cutoff
color_system: ryb
sync_mode: 5
rule: tetrad
seed: 42
"#;
        let config = ColorSetConfig::parse(yaml).unwrap();

        assert_eq!(config.h_range, (30.0, 90.0));
        assert_eq!(config.s_range, (0.2, 0.4));
        assert_eq!(config.v_range, (0.6, 1.0));
        assert_eq!(config.overflow, OverflowPolicy::Cutoff);
        assert_eq!(config.color_system, ColorSystem::Ryb);
        assert_eq!(config.sync_mode, SyncMode::Gradient);
        assert_eq!(config.rule, HarmonyRule::Tetrad);
        assert_eq!(config.seed, Some(42));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = "rule: triad\noverflow: clip\n";
        let err = ColorSetConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line, .. } if line > 0), "{err}");
        assert!(err.to_string().contains("clip"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_parse_validates() {
        let err = ColorSetConfig::parse("v_range: [0.9, 0.1]").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
