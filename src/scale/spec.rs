use thiserror::Error;

use super::util::{self, sorted_pair};
use crate::function::ScaleFunction;
use crate::label::{LabelRenderer, LabelSize};
use crate::precision::{PrecisionClass, tolerance_class};

/// Maximum number of tick density levels on any scale.
pub const MAX_LEVELS: usize = 4;

/// Problems detected in a [`ScaleSpec`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// The scale declares no tick regions.
    #[error("scale has no tick regions")]
    NoRegions,

    /// Begin and end are equal or not finite.
    #[error("degenerate scale range [{begin}, {end}]")]
    DegenerateRange { begin: f64, end: f64 },

    /// An endpoint lies outside the transform function's domain.
    #[error("endpoint {value} is outside the domain of {function:?}")]
    OutsideDomain { value: f64, function: ScaleFunction },

    /// Region starts are not strictly ascending.
    #[error("region {index} starts at {start}, not after the previous region")]
    RegionsOutOfOrder { index: usize, start: f64 },

    /// The first region starts after the scale's lower bound.
    #[error("first region starts at {start}, leaving a gap after {expected}")]
    LeadingGap { start: f64, expected: f64 },

    /// A region starts beyond the scale's upper bound.
    #[error("region {index} starts at {start}, beyond the scale end {bound}")]
    RegionOutOfRange { index: usize, start: f64, bound: f64 },

    /// A region declares more than [`MAX_LEVELS`] interval levels.
    #[error("region {index} declares {levels} levels, at most 4 are supported")]
    TooManyLevels { index: usize, levels: usize },

    /// A finer level has a larger interval than a coarser one.
    #[error("region {index}: interval at level {level} is larger than a coarser level")]
    IncreasingInterval { index: usize, level: usize },

    /// A multi-decade scale declares zero cycles.
    #[error("cycle count must be at least one")]
    NoCycles,

    /// The declared cycles end before the scale does.
    #[error("{count} cycles end at {covered}, short of the scale end {end}")]
    CyclesTooShort { count: usize, covered: f64, end: f64 },
}

/// A contiguous part of a scale with its own tick density.
///
/// `intervals[0]` is the major (coarsest) interval, following entries are
/// progressively finer. `None` entries, and non-positive sizes, produce no
/// ticks at that level.
#[derive(Debug, Clone, PartialEq)]
pub struct TickRegion {
    start: f64,
    intervals: Vec<Option<f64>>,
    labeled: u8,
    renderer: Option<LabelRenderer>,
}

impl TickRegion {
    /// Creates a region whose major level is labelled.
    pub fn new(start: f64, intervals: impl Into<Vec<Option<f64>>>) -> Self {
        Self {
            start,
            intervals: intervals.into(),
            labeled: 1,
            renderer: None,
        }
    }

    /// Replaces the set of labelled levels.
    pub fn with_labeled_levels(mut self, levels: &[u8]) -> Self {
        self.labeled = levels
            .iter()
            .filter(|&&level| usize::from(level) < MAX_LEVELS)
            .fold(0, |mask, level| mask | (1 << *level));
        self
    }

    /// Leaves every level of this region unlabelled.
    pub fn unlabeled(self) -> Self {
        self.with_labeled_levels(&[])
    }

    /// Overrides the scale-wide label renderer inside this region.
    pub fn with_renderer(mut self, renderer: LabelRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn intervals(&self) -> &[Option<f64>] {
        &self.intervals
    }

    pub fn renderer(&self) -> Option<&LabelRenderer> {
        self.renderer.as_ref()
    }

    pub fn is_labeled(&self, level: u8) -> bool {
        usize::from(level) < MAX_LEVELS && self.labeled & (1 << level) != 0
    }

    /// Levels that contribute ticks, with their interval sizes.
    pub fn active_levels(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.intervals
            .iter()
            .take(MAX_LEVELS)
            .enumerate()
            .filter_map(|(level, interval)| {
                let interval = (*interval)?;
                (interval > 0.0 && interval.is_finite()).then_some((level as u8, interval))
            })
    }

    /// Smallest interval that produces ticks.
    pub fn finest_interval(&self) -> Option<f64> {
        self.active_levels().last().map(|(_, interval)| interval)
    }
}

/// Repetition of the region list across consecutive decades.
///
/// Region starts are given relative to one decade. Cycle `k` multiplies them
/// by `10^(first_exponent + k)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycles {
    pub count: usize,
    pub first_exponent: i32,
}

impl Cycles {
    pub const fn new(count: usize, first_exponent: i32) -> Self {
        Self {
            count,
            first_exponent,
        }
    }

    /// Value multiplier of cycle `index`.
    pub fn multiplier(&self, index: usize) -> f64 {
        let offset = i32::try_from(index).unwrap_or(i32::MAX);
        10f64.powi(self.first_exponent.saturating_add(offset))
    }

    /// Splits `value` into its decade-relative value and cycle index.
    pub fn locate(&self, value: f64, regions: &[TickRegion]) -> (f64, usize) {
        let cycle = regions
            .first()
            .map_or(0, |first| self.cycle_of(value, first.start()));
        (value / self.multiplier(cycle), cycle)
    }

    /// Cycle containing `value`, given the decade-relative start of the regions.
    pub fn cycle_of(&self, value: f64, decade_start: f64) -> usize {
        let decades = (value / decade_start).log10() - f64::from(self.first_exponent);
        // tolerate log10 landing just below an exact decade
        let decades = (decades + 1e-12).floor();
        if decades <= 0.0 || !decades.is_finite() {
            0
        } else {
            (decades as usize).min(self.count.saturating_sub(1))
        }
    }
}

/// A named reference value drawn on a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleConstant {
    pub value: f64,
    pub label: String,
}

/// Declarative description of one slide rule scale.
///
/// `begin` and `end` keep their declared order, so a scale running right to
/// left is declared with `begin > end`. Regions are always listed by
/// ascending start value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSpec {
    name: String,
    function: ScaleFunction,
    begin: f64,
    end: f64,
    regions: Vec<TickRegion>,
    level_sizes: [LabelSize; MAX_LEVELS],
    renderer: Option<LabelRenderer>,
    constants: Vec<ScaleConstant>,
    cycles: Option<Cycles>,
}

impl ScaleSpec {
    pub fn new(name: impl Into<String>, function: ScaleFunction, begin: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            function,
            begin,
            end,
            regions: Vec::new(),
            level_sizes: LabelSize::DEFAULT_LEVELS,
            renderer: None,
            constants: Vec::new(),
            cycles: None,
        }
    }

    pub fn with_regions(mut self, regions: Vec<TickRegion>) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_region(mut self, region: TickRegion) -> Self {
        self.regions.push(region);
        self
    }

    /// Sets the scale-wide label renderer.
    pub fn with_renderer(mut self, renderer: LabelRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_level_sizes(mut self, sizes: [LabelSize; MAX_LEVELS]) -> Self {
        self.level_sizes = sizes;
        self
    }

    pub fn with_constant(mut self, value: f64, label: impl Into<String>) -> Self {
        self.constants.push(ScaleConstant {
            value,
            label: label.into(),
        });
        self
    }

    /// Repeats the regions over `count` decades starting at `10^first_exponent`.
    pub fn with_cycles(mut self, count: usize, first_exponent: i32) -> Self {
        self.cycles = Some(Cycles::new(count, first_exponent));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &ScaleFunction {
        &self.function
    }

    pub fn begin(&self) -> f64 {
        self.begin
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// `(min, max)` of the begin and end values.
    pub fn bounds(&self) -> (f64, f64) {
        sorted_pair(self.begin, self.end)
    }

    pub fn regions(&self) -> &[TickRegion] {
        &self.regions
    }

    pub fn renderer(&self) -> Option<&LabelRenderer> {
        self.renderer.as_ref()
    }

    pub fn level_size(&self, level: u8) -> LabelSize {
        self.level_sizes
            .get(usize::from(level))
            .copied()
            .unwrap_or(LabelSize::Tiny)
    }

    pub fn constants(&self) -> &[ScaleConstant] {
        &self.constants
    }

    pub fn cycles(&self) -> Option<&Cycles> {
        self.cycles.as_ref()
    }

    pub const fn precision_class(&self) -> PrecisionClass {
        tolerance_class(&self.function)
    }

    /// Checks the structural invariants the tick engine relies on.
    ///
    /// The engine does not call this; it produces some tick set for any
    /// specification.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.begin.is_finite() || !self.end.is_finite() || self.begin == self.end {
            return Err(SpecError::DegenerateRange {
                begin: self.begin,
                end: self.end,
            });
        }
        for value in [self.begin, self.end] {
            if !self.function.accepts(value) {
                return Err(SpecError::OutsideDomain {
                    value,
                    function: self.function,
                });
            }
        }
        if self.cycles.is_some_and(|cycles| cycles.count == 0) {
            return Err(SpecError::NoCycles);
        }

        let Some(first) = self.regions.first() else {
            return Err(SpecError::NoRegions);
        };

        let tolerance = self.precision_class().round_trip_tolerance();
        let (lo, hi) = self.bounds();
        if let Some(cycles) = &self.cycles {
            let covered = first.start * 10.0 * cycles.multiplier(cycles.count - 1);
            if hi > covered && !util::same_value(hi, covered, tolerance) {
                return Err(SpecError::CyclesTooShort {
                    count: cycles.count,
                    covered,
                    end: hi,
                });
            }
        }
        let (lo, hi) = match &self.cycles {
            // region starts are decade-relative
            Some(cycles) => (lo / cycles.multiplier(0), first.start * 10.0),
            None => (lo, hi),
        };

        if first.start > lo && !util::approx_eq(first.start, lo, tolerance) {
            return Err(SpecError::LeadingGap {
                start: first.start,
                expected: lo,
            });
        }

        for (index, region) in self.regions.iter().enumerate() {
            if index > 0 && region.start <= self.regions[index - 1].start {
                return Err(SpecError::RegionsOutOfOrder {
                    index,
                    start: region.start,
                });
            }
            if region.start > hi && !util::approx_eq(region.start, hi, tolerance) {
                return Err(SpecError::RegionOutOfRange {
                    index,
                    start: region.start,
                    bound: hi,
                });
            }
            if region.intervals.len() > MAX_LEVELS {
                return Err(SpecError::TooManyLevels {
                    index,
                    levels: region.intervals.len(),
                });
            }
            let mut coarser: Option<f64> = None;
            for (level, interval) in region.active_levels() {
                if coarser.is_some_and(|previous| interval > previous) {
                    return Err(SpecError::IncreasingInterval {
                        index,
                        level: usize::from(level),
                    });
                }
                coarser = Some(interval);
            }
        }

        Ok(())
    }
}
