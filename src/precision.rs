//! Numerical precision model.
//!
//! Every [`ScaleFunction`] falls into a [`PrecisionClass`] according to how
//! many transcendental operations it nests. The class decides how far a
//! value may drift through a `position -> value -> position` round trip and
//! how close two tick values must be to count as the same tick.
//!
//! [`CursorPrecision`] answers a different question: how many decimals a
//! cursor readout should show at a given value, derived from the finest
//! graduation of the region under the cursor. On multi-decade scales the
//! graduation is decade-relative, and so is the printed reading.

use crate::function::ScaleFunction;
use crate::label::{LabelRenderer, si_prefix};
use crate::scale::{Cycles, ScaleSpec, TickRegion};

/// Tolerance used when checking a formatted label against its rounded value.
pub const DISPLAY_TOLERANCE: f64 = 5e-5;

/// Decimals shown when no graduation information applies.
pub const DEFAULT_CURSOR_DECIMALS: usize = 2;

const MIN_CURSOR_DECIMALS: usize = 1;
const MAX_CURSOR_DECIMALS: usize = 5;

/// Tolerance tier of a transform function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrecisionClass {
    /// Algebraic layout, no transcendental operation.
    Direct,
    /// A single logarithm or exponential.
    SingleTranscendental,
    /// Two or more transcendental operations composed.
    NestedTranscendental,
}

impl PrecisionClass {
    /// Class for a given composition depth.
    pub const fn from_depth(depth: u8) -> Self {
        match depth {
            0 => Self::Direct,
            1 => Self::SingleTranscendental,
            _ => Self::NestedTranscendental,
        }
    }

    /// Acceptable error of a value or position round trip.
    pub const fn round_trip_tolerance(self) -> f64 {
        match self {
            Self::Direct => 1e-14,
            Self::SingleTranscendental => 1e-12,
            Self::NestedTranscendental => 1e-10,
        }
    }

    /// Compares two values with this class's tolerance, relative above one.
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        crate::scale::util::approx_eq(a, b, self.round_trip_tolerance())
    }
}

/// Precision class of a transform function.
pub const fn tolerance_class(function: &ScaleFunction) -> PrecisionClass {
    PrecisionClass::from_depth(function.composition_depth())
}

/// Round-trip tolerance of a transform function's class.
pub const fn round_trip_tolerance(function: &ScaleFunction) -> f64 {
    tolerance_class(function).round_trip_tolerance()
}

/// Cursor readout precision driven by a scale's tick regions.
///
/// # Examples
///
/// ```rust
/// use sliderule::{CursorPrecision, ScaleFunction, ScaleSpec, TickRegion};
///
/// let spec = ScaleSpec::new("C", ScaleFunction::Log10, 1.0, 10.0).with_regions(vec![
///     TickRegion::new(1.0, [Some(1.0), Some(0.1), Some(0.05), Some(0.01)]),
///     TickRegion::new(4.0, [Some(1.0), Some(0.5), Some(0.1), None]),
/// ]);
/// let precision = CursorPrecision::new(&spec);
///
/// assert_eq!(precision.decimal_places(1.5), 3);
/// assert_eq!(precision.format(1.5), "1.500");
/// assert_eq!(precision.decimal_places(7.0), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CursorPrecision<'a> {
    spec: &'a ScaleSpec,
}

impl<'a> CursorPrecision<'a> {
    pub const fn new(spec: &'a ScaleSpec) -> Self {
        Self { spec }
    }

    /// Decimals to display for a cursor sitting on `value`.
    ///
    /// On multi-decade scales this counts decimals of the decade-relative
    /// reading, the one [`format`](Self::format) prints next to its decade.
    pub fn decimal_places(&self, value: f64) -> usize {
        self.finest_interval(value)
            .map_or(DEFAULT_CURSOR_DECIMALS, |(interval, _)| {
                interval_to_decimals(interval)
            })
    }

    /// Formats `value` for a cursor readout.
    ///
    /// Multi-decade scales print the decade-relative reading with its
    /// exponent (`2.50e-3`), or with an SI prefix when the scale is labelled
    /// in engineering notation (`4.70nF`).
    pub fn format(&self, value: f64) -> String {
        match (self.finest_interval(value), self.spec.cycles()) {
            (Some((interval, Some(cycle))), Some(cycles)) => {
                self.format_in_decade(value, interval, cycles, cycle)
            }
            (Some((interval, _)), _) => {
                let decimals = interval_to_decimals(interval);
                format!("{value:.decimals$}")
            }
            (None, _) => {
                let decimals = DEFAULT_CURSOR_DECIMALS;
                format!("{value:.decimals$}")
            }
        }
    }

    /// Finest interval of the region under `value`, and the cycle it lies in.
    fn finest_interval(&self, value: f64) -> Option<(f64, Option<usize>)> {
        let (lo, hi) = self.spec.bounds();
        if !(lo..=hi).contains(&value) {
            return None;
        }

        let regions = self.spec.regions();
        let (relative, cycle) = match self.spec.cycles() {
            Some(cycles) => {
                let (relative, cycle) = cycles.locate(value, regions);
                (relative, Some(cycle))
            }
            None => (value, None),
        };
        let interval = active_region(regions, relative)?.finest_interval()?;
        Some((interval, cycle))
    }

    fn format_in_decade(&self, value: f64, interval: f64, cycles: &Cycles, cycle: usize) -> String {
        let cycle_offset = i32::try_from(cycle).unwrap_or(i32::MAX);

        if let Some(LabelRenderer::Engineering {
            unit,
            first_exponent,
        }) = self.spec.renderer()
        {
            let decade = first_exponent.saturating_add(cycle_offset);
            if let Some((prefix, power)) = si_prefix(decade) {
                let shown = value / 10f64.powi(power);
                let decimals = interval_to_decimals(interval * 10f64.powi(decade - power));
                return format!("{shown:.decimals$}{prefix}{unit}");
            }
        }

        let decimals = interval_to_decimals(interval);
        let relative = value / cycles.multiplier(cycle);
        let decade = cycles.first_exponent.saturating_add(cycle_offset);
        format!("{relative:.decimals$}e{decade}")
    }
}

/// Last region whose start is at or below `value`.
///
/// In-range values that round just below the first start (a decade edge on
/// multi-decade scales) belong to the first region.
fn active_region(regions: &[TickRegion], value: f64) -> Option<&TickRegion> {
    regions
        .iter()
        .take_while(|region| region.start() <= value)
        .last()
        .or_else(|| regions.first())
}

fn interval_to_decimals(interval: f64) -> usize {
    if interval >= 1.0 {
        return MIN_CURSOR_DECIMALS;
    }
    if interval <= 0.0 || !interval.is_finite() {
        return DEFAULT_CURSOR_DECIMALS;
    }
    // One more digit than the graduation for interpolating between marks.
    let digits = -interval.log10().floor() + 1.0;
    (digits.max(0.0) as usize).clamp(MIN_CURSOR_DECIMALS, MAX_CURSOR_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ll00() -> ScaleSpec {
        ScaleSpec::new("LL00", ScaleFunction::NegLogLog, 0.990, 0.999).with_regions(vec![
            TickRegion::new(0.990, [Some(0.001), Some(0.0005), Some(0.0001), Some(0.00005)]),
            TickRegion::new(0.995, [Some(0.001), Some(0.0005), Some(0.0001), Some(0.00002)]),
            TickRegion::new(0.998, [Some(0.0005), Some(0.0001), Some(0.00005), Some(0.00001)]),
        ])
    }

    fn k() -> ScaleSpec {
        ScaleSpec::new("K", ScaleFunction::Cube, 1.0, 1000.0).with_regions(vec![
            TickRegion::new(1.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]),
            TickRegion::new(3.0, [Some(1.0), None, Some(0.5), Some(0.1)]),
            TickRegion::new(6.0, [Some(1.0), None, None, Some(0.2)]),
            TickRegion::new(10.0, [Some(10.0), Some(5.0), Some(1.0), Some(0.5)]),
            TickRegion::new(30.0, [Some(10.0), None, Some(5.0), Some(1.0)]),
            TickRegion::new(60.0, [Some(10.0), None, None, Some(2.0)]),
            TickRegion::new(100.0, [Some(100.0), Some(50.0), Some(10.0), Some(5.0)]),
            TickRegion::new(300.0, [Some(100.0), None, Some(50.0), Some(10.0)]),
            TickRegion::new(600.0, [Some(100.0), None, None, Some(20.0)]),
        ])
    }

    #[test]
    fn test_classes_by_depth() {
        assert_eq!(tolerance_class(&ScaleFunction::Linear), PrecisionClass::Direct);
        assert_eq!(
            tolerance_class(&ScaleFunction::Log10),
            PrecisionClass::SingleTranscendental
        );
        assert_eq!(
            tolerance_class(&ScaleFunction::Sine),
            PrecisionClass::NestedTranscendental
        );
        assert_eq!(
            tolerance_class(&ScaleFunction::LogLog),
            PrecisionClass::NestedTranscendental
        );
    }

    #[test]
    fn test_tolerances_loosen_with_depth() {
        assert_eq!(PrecisionClass::Direct.round_trip_tolerance(), 1e-14);
        assert_eq!(PrecisionClass::SingleTranscendental.round_trip_tolerance(), 1e-12);
        assert_eq!(PrecisionClass::NestedTranscendental.round_trip_tolerance(), 1e-10);
        assert!(DISPLAY_TOLERANCE > PrecisionClass::NestedTranscendental.round_trip_tolerance());
    }

    #[test]
    fn test_approx_eq_is_relative_above_one() {
        let class = PrecisionClass::SingleTranscendental;
        assert!(class.approx_eq(1000.0, 1000.0 + 1e-10));
        assert!(!class.approx_eq(1.0, 1.0 + 1e-10));
        assert!(class.approx_eq(0.0, 1e-13));
    }

    #[test]
    fn test_interval_to_decimals() {
        assert_eq!(interval_to_decimals(1.0), 1);
        assert_eq!(interval_to_decimals(10.0), 1);
        assert_eq!(interval_to_decimals(0.5), 2);
        assert_eq!(interval_to_decimals(0.01), 3);
        assert_eq!(interval_to_decimals(0.02), 3);
        assert_eq!(interval_to_decimals(0.00001), 5);
        assert_eq!(interval_to_decimals(0.0), DEFAULT_CURSOR_DECIMALS);
    }

    #[test]
    fn test_fine_scale_reaches_max_decimals() {
        let spec = ll00();
        let precision = CursorPrecision::new(&spec);
        assert_eq!(precision.decimal_places(0.990), 5);
        assert_eq!(precision.decimal_places(0.9985), 5);
        assert_eq!(precision.format(0.9985), "0.99850");
    }

    #[test]
    fn test_coarse_scale_uses_one_decimal() {
        let spec = k();
        let precision = CursorPrecision::new(&spec);
        assert_eq!(precision.decimal_places(1.0), 3);
        assert_eq!(precision.decimal_places(5.0), 2);
        assert_eq!(precision.decimal_places(50.0), 1);
        assert_eq!(precision.decimal_places(500.0), 1);
        assert_eq!(precision.decimal_places(1000.0), 1);
    }

    fn capacitance() -> ScaleSpec {
        ScaleSpec::new("Cap", ScaleFunction::Log10, 1e-12, 1e-6)
            .with_cycles(6, -12)
            .with_renderer(LabelRenderer::Engineering {
                unit: "F".into(),
                first_exponent: -12,
            })
            .with_regions(vec![
                TickRegion::new(1.0, [Some(1.0), Some(0.5), Some(0.1)]),
                TickRegion::new(5.0, [Some(1.0), Some(0.5)]),
            ])
    }

    #[test]
    fn test_cycled_scale_uses_decade_relative_interval() {
        let spec = capacitance();
        let precision = CursorPrecision::new(&spec);

        assert_eq!(precision.decimal_places(1.5e-12), 2);
        assert_eq!(precision.decimal_places(4.7e-9), 2);
        assert_eq!(precision.decimal_places(6e-8), 2);
        assert_eq!(precision.decimal_places(1e-12), 2);
    }

    #[test]
    fn test_cycled_scale_formats_with_si_prefix() {
        let spec = capacitance();
        let precision = CursorPrecision::new(&spec);

        assert_eq!(precision.format(1.5e-12), "1.50pF");
        assert_eq!(precision.format(4.7e-9), "4.70nF");
        assert_eq!(precision.format(2.2e-10), "220.0pF");
        assert_eq!(precision.format(1e-6), "1000.0nF");
    }

    #[test]
    fn test_cycled_scale_without_prefix_prints_exponent() {
        let spec = ScaleSpec::new("Log", ScaleFunction::Log10, 1e-3, 1.0)
            .with_cycles(3, -3)
            .with_region(TickRegion::new(1.0, [Some(1.0), Some(0.1)]));
        let precision = CursorPrecision::new(&spec);

        assert_eq!(precision.format(0.0025), "2.50e-3");
        assert_eq!(precision.format(0.35), "3.50e-1");
    }

    #[test]
    fn test_out_of_range_falls_back() {
        let spec = k();
        let precision = CursorPrecision::new(&spec);
        assert_eq!(precision.decimal_places(0.5), DEFAULT_CURSOR_DECIMALS);
        assert_eq!(precision.decimal_places(2000.0), DEFAULT_CURSOR_DECIMALS);
    }
}
