//! Slide rule scales: specification, position mapping and tick generation.
//!
//! A [`ScaleSpec`] describes one scale declaratively. [`PositionMapper`]
//! places values along it, [`TickEngine`] walks its regions and produces the
//! graduations, and [`SlideScale`] bundles the three behind the [`Scale`]
//! trait used by [`RuleLayout`](crate::RuleLayout).

pub mod mapper;
pub mod spec;
pub mod ticks;
pub mod util;

use num_traits::Float;

use crate::label::LabelSize;
use crate::precision::{CursorPrecision, DEFAULT_CURSOR_DECIMALS};

pub use mapper::{PositionMapper, position, value};
pub use spec::{Cycles, MAX_LEVELS, ScaleConstant, ScaleSpec, SpecError, TickRegion};
pub use ticks::{TickEngine, generate_many, generate_ticks, place_constants};

/// A graduation produced by the tick engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark<N = f64> {
    /// Domain value of the mark.
    pub value: f64,
    /// Fraction of the scale length, `0` at the scale's begin value.
    pub position: N,
    /// Density level, `0` being the coarsest.
    pub level: u8,
    /// Primary label, `None` when suppressed.
    pub label: Option<String>,
    /// Secondary reading of dual-labelled scales.
    pub alt_label: Option<String>,
    /// Display size of the label, set only on labelled marks.
    pub label_size: Option<LabelSize>,
    /// Decade cycle the mark was generated in, on multi-decade scales.
    pub cycle: Option<usize>,
}

impl<N> TickMark<N> {
    pub fn is_labeled(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.is_empty())
    }
}

/// A fixed reference point (π, e, ...) placed on a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantMark<N = f64> {
    pub value: f64,
    pub position: N,
    pub label: String,
}

/// Mapping between a scale's domain and the normalized `[0, 1]` range.
pub trait Scale {
    /// Type of normalized positions, typically `f64` or `f32`.
    type Normalized: Float;

    /// The scale's `(begin, end)` values, in declared order.
    fn domain(&self) -> (f64, f64);

    /// Normalized position of `value`, `None` if it cannot be represented.
    fn normalize_opt(&self, value: f64) -> Option<Self::Normalized>;

    /// Domain value at normalized position `t`.
    fn denormalize_opt(&self, t: Self::Normalized) -> Option<f64>;

    /// Like [`normalize_opt`](Self::normalize_opt), NaN on failure.
    fn normalize(&self, value: f64) -> Self::Normalized {
        self.normalize_opt(value)
            .unwrap_or_else(Self::Normalized::nan)
    }

    /// Like [`denormalize_opt`](Self::denormalize_opt), NaN on failure.
    fn denormalize(&self, t: Self::Normalized) -> f64 {
        self.denormalize_opt(t).unwrap_or(f64::NAN)
    }

    /// Tick marks in ascending value order.
    fn ticks(&self) -> Vec<TickMark<Self::Normalized>>;

    /// Whether `value` lies between the scale's begin and end values.
    fn is_valid_domain_value(&self, value: f64) -> bool;

    /// Cursor readout text for `value`.
    fn format_value(&self, value: f64) -> String {
        let decimals = DEFAULT_CURSOR_DECIMALS;
        format!("{value:.decimals$}")
    }
}

/// A validated scale specification together with its position mapper.
///
/// # Examples
///
/// ```rust
/// use sliderule::{LabelRenderer, Scale, ScaleFunction, ScaleSpec, SlideScale, TickRegion};
///
/// let spec = ScaleSpec::new("D", ScaleFunction::Log10, 1.0, 10.0)
///     .with_renderer(LabelRenderer::Integer)
///     .with_regions(vec![TickRegion::new(1.0, [Some(1.0), Some(0.5), Some(0.1)])]);
/// let scale = SlideScale::<f64>::new(spec).unwrap();
///
/// assert!((scale.normalize(2.0) - 2f64.log10()).abs() < 1e-12);
/// assert!((scale.denormalize(0.5) - 10f64.sqrt()).abs() < 1e-12);
///
/// let ticks = scale.ticks();
/// assert_eq!(ticks.first().map(|t| t.value), Some(1.0));
/// assert_eq!(ticks.last().and_then(|t| t.label.clone()).as_deref(), Some("10"));
/// ```
#[derive(Debug, Clone)]
pub struct SlideScale<N = f64>
where
    N: Float,
{
    spec: ScaleSpec,
    mapper: PositionMapper<N>,
}

impl<N: Float> SlideScale<N> {
    /// Validates `spec` and builds its mapper.
    pub fn new(spec: ScaleSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let mapper = PositionMapper::from_spec(&spec);
        Ok(Self { spec, mapper })
    }

    pub fn spec(&self) -> &ScaleSpec {
        &self.spec
    }

    pub fn mapper(&self) -> &PositionMapper<N> {
        &self.mapper
    }

    /// The scale's reference constants, placed along it.
    pub fn constants(&self) -> Vec<ConstantMark<N>> {
        TickEngine::<N>::new(&self.spec).constants()
    }
}

impl<N: Float> Scale for SlideScale<N> {
    type Normalized = N;

    fn domain(&self) -> (f64, f64) {
        (self.spec.begin(), self.spec.end())
    }

    fn normalize_opt(&self, value: f64) -> Option<N> {
        self.mapper.position_opt(value)
    }

    fn denormalize_opt(&self, t: N) -> Option<f64> {
        self.mapper.value_opt(t)
    }

    fn ticks(&self) -> Vec<TickMark<N>> {
        TickEngine::new(&self.spec).generate()
    }

    fn is_valid_domain_value(&self, value: f64) -> bool {
        let (lo, hi) = self.spec.bounds();
        (lo..=hi).contains(&value)
    }

    fn format_value(&self, value: f64) -> String {
        CursorPrecision::new(&self.spec).format(value)
    }
}
