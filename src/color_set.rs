//! The five-color harmony engine.
//!
//! A [`ColorSet`] holds exactly five colors. Slot 0 is the anchor; the
//! conventional display order is 2, 1, 0, 3, 4. A [`HarmonyRule`] decides how
//! [`ColorSet::create`] shapes the set and how [`ColorSet::modify`] propagates
//! a single edit to the other four slots. A non-zero [`SyncMode`] overrides
//! the rule's propagation.
//!
//! All hue arithmetic runs on the set's [`ColorSystem`] wheel. Mutations are
//! computed on a copy and committed only when every derived color is valid.

use std::ops::Index;

use log::{debug, trace};

use crate::color::{Color, OverflowPolicy};
use crate::config::{check_range, ColorSetConfig};
use crate::error::{Error, Result};
use crate::harmony::{ColorSystem, HarmonyRule, SyncMode};

/// Number of colors in a set.
pub const SET_SIZE: usize = 5;

/// Slot indices in left-to-right display order.
pub const DISPLAY_ORDER: [usize; SET_SIZE] = [2, 1, 0, 3, 4];

/// Fixed values of the shades rule, for slots 1 to 4.
const SHADE_VALUES: [f64; 4] = [0.15, 0.40, 0.65, 0.90];

/// Largest analogous half-angle, in degrees.
const MAX_ANALOGOUS_ANGLE: f64 = 30.0;

/// Range of the random saturation/value steps used for monochromatic bands.
const BAND_STEP: (f64, f64) = (0.15, 0.45);

/// Owned snapshot of a set, for undo history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSetBackup {
    colors: [Color; SET_SIZE],
    rule: HarmonyRule,
}

impl ColorSetBackup {
    /// Colors at the time of the backup, in slot order.
    #[must_use]
    pub const fn colors(&self) -> &[Color; SET_SIZE] {
        &self.colors
    }

    /// Rule at the time of the backup.
    #[must_use]
    pub const fn rule(&self) -> HarmonyRule {
        self.rule
    }
}

/// Five colors kept in a harmony relationship.
#[derive(Debug, Clone)]
pub struct ColorSet {
    colors: [Color; SET_SIZE],
    rule: HarmonyRule,
    overflow: OverflowPolicy,
    color_system: ColorSystem,
    sync_mode: SyncMode,
    h_range: (f64, f64),
    s_range: (f64, f64),
    v_range: (f64, f64),
    rng: fastrand::Rng,
}

/// Hue offsets of slots 1 to 4 for an analogous fan with half-angle `angle`.
fn fan_offsets(angle: f64) -> [f64; 4] {
    [-angle, -2.0 * angle, angle, 2.0 * angle]
}

/// Gradient sync plan for an edited slot: `(target, reference, factor)`.
///
/// The target becomes `anchor + factor * (reference - anchor)` in hue offset,
/// saturation and value.
const fn gradient_plan(index: usize) -> &'static [(usize, usize, f64)] {
    match index {
        0 => &[(1, 2, 0.5), (3, 4, 0.5)],
        1 => &[(2, 1, 2.0), (3, 1, -1.0), (4, 1, -2.0)],
        2 => &[(1, 2, 0.5), (3, 2, -0.5), (4, 2, -1.0)],
        3 => &[(4, 3, 2.0), (1, 3, -1.0), (2, 3, -2.0)],
        _ => &[(3, 4, 0.5), (1, 4, -0.5), (2, 4, -1.0)],
    }
}

/// Mirror partner of a non-anchor slot.
const fn mirror_partner(index: usize) -> usize {
    match index {
        1 => 3,
        3 => 1,
        2 => 4,
        _ => 2,
    }
}

impl ColorSet {
    /// Create a set: random colors within the configured ranges, shaped by
    /// the configured rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use chromaset::color_set::ColorSet;
    /// use chromaset::config::ColorSetConfig;
    /// use chromaset::harmony::HarmonyRule;
    ///
    /// let config = ColorSetConfig::new().with_seed(1).with_rule(HarmonyRule::Shades);
    /// let set = ColorSet::new(&config).unwrap();
    /// assert_eq!(set[4].v(), 0.9);
    /// ```
    pub fn new(config: &ColorSetConfig) -> Result<Self> {
        let mut set = Self::from_colors([Color::BLACK; SET_SIZE], config)?;
        set.initialize()?;
        set.create(config.rule)?;
        Ok(set)
    }

    /// Like [`ColorSet::new`] with an explicit seed, overriding the
    /// configuration's.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the configuration is invalid.
    pub fn with_seed(config: &ColorSetConfig, seed: u64) -> Result<Self> {
        Self::new(&config.clone().with_seed(seed))
    }

    /// Wrap existing colors without randomizing or shaping them.
    ///
    /// The set takes the configured rule, but its colors are kept as given
    /// until [`ColorSet::create`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the configuration is invalid.
    pub fn from_colors(colors: [Color; SET_SIZE], config: &ColorSetConfig) -> Result<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Ok(Self {
            colors: colors.map(|c| c.with_overflow(config.overflow)),
            rule: config.rule,
            overflow: config.overflow,
            color_system: config.color_system,
            sync_mode: config.sync_mode,
            h_range: config.h_range,
            s_range: config.s_range,
            v_range: config.v_range,
            rng,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Colors in slot order.
    #[must_use]
    pub const fn colors(&self) -> &[Color; SET_SIZE] {
        &self.colors
    }

    /// Color at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `index >= 5`.
    pub fn get(&self, index: usize) -> Result<&Color> {
        self.colors.get(index).ok_or_else(|| Error::slot(index))
    }

    /// Colors in display order (2, 1, 0, 3, 4).
    #[must_use]
    pub fn display_order(&self) -> [Color; SET_SIZE] {
        DISPLAY_ORDER.map(|i| self.colors[i])
    }

    /// Current harmony rule.
    #[must_use]
    pub const fn rule(&self) -> HarmonyRule {
        self.rule
    }

    /// Overflow policy shared by every color of the set.
    #[must_use]
    pub const fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Wheel used for hue arithmetic.
    #[must_use]
    pub const fn color_system(&self) -> ColorSystem {
        self.color_system
    }

    /// Propagation override.
    #[must_use]
    pub const fn sync_mode(&self) -> SyncMode {
        self.sync_mode
    }

    /// Hue, saturation and value ranges used by [`ColorSet::initialize`].
    #[must_use]
    pub const fn hsv_ranges(&self) -> [(f64, f64); 3] {
        [self.h_range, self.s_range, self.v_range]
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Change the overflow policy of the set and of every color in it.
    pub fn set_overflow(&mut self, overflow: OverflowPolicy) {
        self.overflow = overflow;
        for color in &mut self.colors {
            color.set_overflow(overflow);
        }
    }

    /// Change the wheel used for hue arithmetic.
    pub fn set_color_system(&mut self, color_system: ColorSystem) {
        self.color_system = color_system;
    }

    /// Change the propagation override.
    pub fn set_sync_mode(&mut self, sync_mode: SyncMode) {
        self.sync_mode = sync_mode;
    }

    /// Change the ranges used by [`ColorSet::initialize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] (changing nothing) unless each range
    /// satisfies `0 <= lo <= hi`, with `hi <= 360` for hue and `hi <= 1`
    /// for saturation and value.
    pub fn set_hsv_ranges(&mut self, h: (f64, f64), s: (f64, f64), v: (f64, f64)) -> Result<()> {
        check_range("hue", h, 360.0)?;
        check_range("saturation", s, 1.0)?;
        check_range("value", v, 1.0)?;
        self.h_range = h;
        self.s_range = s;
        self.v_range = v;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Undo support
    // ------------------------------------------------------------------

    /// Snapshot the colors and rule.
    #[must_use]
    pub fn backup(&self) -> ColorSetBackup {
        ColorSetBackup { colors: self.colors, rule: self.rule }
    }

    /// Restore a snapshot taken with [`ColorSet::backup`].
    pub fn recover(&mut self, backup: &ColorSetBackup) {
        self.colors = backup.colors.map(|c| c.with_overflow(self.overflow));
        self.rule = backup.rule;
    }

    // ------------------------------------------------------------------
    // Color helpers
    // ------------------------------------------------------------------

    fn hsv(&self, hsv: [f64; 3]) -> Result<Color> {
        Color::from_hsv(hsv, self.overflow)
    }

    fn with_hue(&self, color: &Color, h: f64) -> Result<Color> {
        self.hsv([h, color.s(), color.v()])
    }

    fn shifted(&self, color: &Color, dh: f64, ds: f64, dv: f64) -> Result<Color> {
        self.hsv([self.color_system.shift(color.h(), dh), color.s() + ds, color.v() + dv])
    }

    /// Move every slot except `index` by the given deltas.
    fn rotate_others(&self, next: &mut [Color; SET_SIZE], index: usize, dh: f64, ds: f64, dv: f64) -> Result<()> {
        for j in (0..SET_SIZE).filter(|&j| j != index) {
            next[j] = self.shifted(&next[j], dh, ds, dv)?;
        }
        Ok(())
    }

    /// Put slots 1 to 4 at the given hue offsets from the anchor, except
    /// `skip`, keeping each slot's saturation and value.
    fn place_hues(&self, next: &mut [Color; SET_SIZE], offsets: [f64; 4], skip: Option<usize>) -> Result<()> {
        let h0 = next[0].h();
        for (j, offset) in (1..SET_SIZE).zip(offsets) {
            if Some(j) != skip {
                next[j] = self.with_hue(&next[j], self.color_system.shift(h0, offset))?;
            }
        }
        Ok(())
    }

    fn random_in(&mut self, (lo, hi): (f64, f64)) -> f64 {
        lo + self.rng.f64() * (hi - lo)
    }

    /// Saturation/value pairs for slots 1 to 4, stepped from the anchor
    /// away from 0.5. The overflow policy folds steps that leave [0, 1].
    fn sv_bands(&mut self, s0: f64, v0: f64) -> [(f64, f64); 4] {
        let ds = if s0 > 0.5 { 1.0 } else { -1.0 };
        let dv = if v0 > 0.5 { 1.0 } else { -1.0 };
        let [a, b, c, e] = [(); 4].map(|()| self.random_in(BAND_STEP));
        [(s0 + ds * a, v0), (s0 + ds * a, v0 + dv * b), (s0, v0 + dv * c), (s0 + ds * e, v0 + dv * c)]
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Replace every color with a random one inside the configured ranges.
    ///
    /// # Errors
    ///
    /// Returns an error only if a range holds non-finite bounds, which
    /// validation rules out.
    pub fn initialize(&mut self) -> Result<()> {
        let mut next = self.colors;
        for slot in &mut next {
            let h = self.random_in(self.h_range);
            let s = self.random_in(self.s_range);
            let v = self.random_in(self.v_range);
            *slot = self.hsv([h, s, v])?;
        }
        self.colors = next;
        debug!("initialized color set: {}", self.hex_summary());
        Ok(())
    }

    /// Switch to `rule` and reshape the set around the anchor.
    ///
    /// # Errors
    ///
    /// Propagates color construction errors; none occur for sets built by
    /// this crate.
    pub fn set_rule(&mut self, rule: HarmonyRule) -> Result<()> {
        debug!("switching harmony rule {} -> {}", self.rule, rule);
        self.create(rule)
    }

    /// Shape slots 1 to 4 around the anchor according to `rule`, and adopt
    /// `rule` as the set's rule. [`HarmonyRule::Custom`] leaves the colors
    /// as they are.
    ///
    /// # Errors
    ///
    /// Propagates color construction errors; none occur for sets built by
    /// this crate. On error the set is unchanged.
    pub fn create(&mut self, rule: HarmonyRule) -> Result<()> {
        let mut next = self.colors;
        let [h0, s0, v0] = next[0].hsv();

        match rule {
            HarmonyRule::Custom => {}
            HarmonyRule::Analogous => {
                let mut angle = self.color_system.offset(next[1].h(), next[3].h()) / 2.0;
                while angle.abs() > MAX_ANALOGOUS_ANGLE {
                    angle /= 2.0;
                }
                self.place_hues(&mut next, fan_offsets(angle), None)?;
            }
            HarmonyRule::Monochromatic => {
                let bands = self.sv_bands(s0, v0);
                for (j, (s, v)) in (1..SET_SIZE).zip(bands) {
                    next[j] = self.hsv([h0, s, v])?;
                }
            }
            HarmonyRule::Triad => {
                self.place_hues(&mut next, [-120.0, -120.0, 120.0, 120.0], None)?;
            }
            HarmonyRule::Tetrad => {
                self.place_hues(&mut next, [-90.0, -180.0, 90.0, 180.0], None)?;
            }
            HarmonyRule::Pentad => {
                self.place_hues(&mut next, [-72.0, -144.0, 72.0, 144.0], None)?;
            }
            HarmonyRule::Complementary => {
                let bands = self.sv_bands(s0, v0);
                let opposite = self.color_system.shift(h0, 180.0);
                for (j, (s, v)) in (1..SET_SIZE).zip(bands) {
                    let h = if j % 2 == 0 { opposite } else { h0 };
                    next[j] = self.hsv([h, s, v])?;
                }
            }
            HarmonyRule::Shades => {
                for (j, v) in (1..SET_SIZE).zip(SHADE_VALUES) {
                    next[j] = self.hsv([h0, s0, v])?;
                }
            }
        }

        self.colors = next;
        self.rule = rule;
        debug!("created {} set: {}", rule, self.hex_summary());
        Ok(())
    }

    /// Replace slot `index` with `color` and re-derive the other four so the
    /// relationship of `rule` (or the active sync mode) still holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `index >= 5`. On error the set
    /// is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use chromaset::color::Color;
    /// use chromaset::color_set::ColorSet;
    /// use chromaset::config::ColorSetConfig;
    /// use chromaset::harmony::HarmonyRule;
    ///
    /// let mut set = ColorSet::new(&ColorSetConfig::new().with_seed(3)).unwrap();
    /// let blue = Color::from_hex("0000FF").unwrap();
    /// set.modify(HarmonyRule::Monochromatic, 2, blue).unwrap();
    /// assert!(set.colors().iter().all(|c| c.h() == 240.0));
    /// ```
    pub fn modify(&mut self, rule: HarmonyRule, index: usize, color: Color) -> Result<()> {
        if index >= SET_SIZE {
            return Err(Error::slot(index));
        }

        let old = self.colors[index];
        let new = color.with_overflow(self.overflow);
        let mut next = self.colors;
        next[index] = new;

        let dh = self.color_system.offset(old.h(), new.h());
        let ds = new.s() - old.s();
        let dv = new.v() - old.v();

        trace!(
            "modify rule={} slot={} sync={:?} {} -> {} (dh={dh:.3}, ds={ds:.3}, dv={dv:.3})",
            rule,
            index,
            self.sync_mode,
            old,
            new
        );

        match self.sync_mode {
            SyncMode::Rule => self.propagate_rule(rule, index, (dh, ds, dv), &mut next)?,
            SyncMode::HueLocked => self.rotate_others(&mut next, index, 0.0, ds, dv)?,
            SyncMode::HueOnly => self.rotate_others(&mut next, index, dh, 0.0, 0.0)?,
            SyncMode::Rigid => self.rotate_others(&mut next, index, dh, ds, dv)?,
            SyncMode::Broadcast => {
                for j in (0..SET_SIZE).filter(|&j| j != index) {
                    next[j] = self.hsv([next[j].h(), new.s(), new.v()])?;
                }
            }
            SyncMode::Gradient => self.propagate_gradient(index, &mut next)?,
            SyncMode::Mirror => self.propagate_mirror(index, &old, &mut next)?,
        }

        self.colors = next;
        Ok(())
    }

    fn propagate_rule(
        &self,
        rule: HarmonyRule,
        index: usize,
        (dh, ds, dv): (f64, f64, f64),
        next: &mut [Color; SET_SIZE],
    ) -> Result<()> {
        let new = next[index];

        match rule {
            HarmonyRule::Custom => {}
            HarmonyRule::Analogous => {
                if index == 0 {
                    self.rotate_others(next, 0, dh, ds, dv)?;
                } else {
                    let offset = self.color_system.offset(next[0].h(), new.h());
                    let angle = match index {
                        1 => -offset,
                        2 => -offset / 2.0,
                        3 => offset,
                        _ => offset / 2.0,
                    };
                    self.place_hues(next, fan_offsets(angle), Some(index))?;
                }
            }
            HarmonyRule::Monochromatic => {
                for j in (0..SET_SIZE).filter(|&j| j != index) {
                    next[j] = self.with_hue(&next[j], new.h())?;
                }
            }
            HarmonyRule::Shades => {
                for j in (0..SET_SIZE).filter(|&j| j != index) {
                    next[j] = self.hsv([new.h(), new.s(), next[j].v()])?;
                }
            }
            HarmonyRule::Triad | HarmonyRule::Pentad | HarmonyRule::Complementary => {
                if index == 0 {
                    self.rotate_others(next, 0, dh, ds, dv)?;
                } else {
                    self.rotate_others(next, index, dh, 0.0, 0.0)?;
                }
            }
            HarmonyRule::Tetrad => {
                if index == 0 {
                    self.rotate_others(next, 0, dh, ds, dv)?;
                } else {
                    let group: &[usize] = if index % 2 == 0 { &[0, 2, 4] } else { &[1, 3] };
                    for &j in group.iter().filter(|&&j| j != index) {
                        next[j] = self.shifted(&next[j], dh, 0.0, 0.0)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn propagate_gradient(&self, index: usize, next: &mut [Color; SET_SIZE]) -> Result<()> {
        let anchor = next[0];
        let relative = |c: &Color| {
            (self.color_system.offset(anchor.h(), c.h()), c.s() - anchor.s(), c.v() - anchor.v())
        };

        let mut derived = *next;
        for &(target, reference, factor) in gradient_plan(index) {
            let (dh, ds, dv) = relative(&next[reference]);
            derived[target] = self.shifted(&anchor, dh * factor, ds * factor, dv * factor)?;
        }
        *next = derived;
        Ok(())
    }

    fn propagate_mirror(&self, index: usize, old: &Color, next: &mut [Color; SET_SIZE]) -> Result<()> {
        let system = self.color_system;
        let h0 = next[0].h();

        if index != 0 {
            let edited = next[index];
            let reflected = system.shift(h0, -system.offset(h0, edited.h()));
            next[mirror_partner(index)] = self.hsv([reflected, edited.s(), edited.v()])?;
            return Ok(());
        }

        for (a, b) in [(1, 3), (2, 4)] {
            let half = (system.offset(old.h(), next[a].h()) - system.offset(old.h(), next[b].h())) / 2.0;
            let s = (next[a].s() + next[b].s()) / 2.0;
            let v = (next[a].v() + next[b].v()) / 2.0;
            next[a] = self.hsv([system.shift(h0, half), s, v])?;
            next[b] = self.hsv([system.shift(h0, -half), s, v])?;
        }
        Ok(())
    }

    fn hex_summary(&self) -> String {
        self.display_order().iter().map(Color::hex).collect::<Vec<_>>().join(" ")
    }
}

impl Index<usize> for ColorSet {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}
