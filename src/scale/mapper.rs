use num_traits::Float;

use super::spec::ScaleSpec;
use crate::function::ScaleFunction;
use crate::precision::{PrecisionClass, tolerance_class};

/// Converts between domain values and normalized positions along a scale.
///
/// Position `0` is the scale's begin value and `1` its end value; in between
/// the mapping is linear in the transform function's coordinate space. The
/// coordinates of the two endpoints are computed once at construction, so a
/// mapper can be kept around for continuous cursor tracking.
///
/// # Type Parameters
///
/// - `N`: Normalized type (typically `f64`, or `f32` for GPU rendering)
///
/// # Examples
///
/// ```rust
/// use sliderule::{PositionMapper, ScaleFunction};
///
/// let c = PositionMapper::<f64>::new(ScaleFunction::Log10, 1.0, 10.0);
/// assert_eq!(c.position(1.0), 0.0);
/// assert_eq!(c.position(10.0), 1.0);
/// assert!((c.value(2f64.log10()) - 2.0).abs() < 1e-12);
///
/// // Reversed scales run from begin to end as well.
/// let ci = PositionMapper::<f64>::new(ScaleFunction::Log10, 10.0, 1.0);
/// assert_eq!(ci.position(10.0), 0.0);
/// assert_eq!(ci.position(1.0), 1.0);
/// ```
///
/// Values outside the declared range are not clamped. What they map to
/// depends on the transform function and may be NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMapper<N = f64>
where
    N: Float,
{
    function: ScaleFunction,
    begin: f64,
    end: f64,
    origin: f64,
    span: f64,
    _phantom: std::marker::PhantomData<N>,
}

impl<N: Float> PositionMapper<N> {
    pub fn new(function: ScaleFunction, begin: f64, end: f64) -> Self {
        let origin = function.transform(begin);
        let span = function.transform(end) - origin;
        Self {
            function,
            begin,
            end,
            origin,
            span,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn from_spec(spec: &ScaleSpec) -> Self {
        Self::new(*spec.function(), spec.begin(), spec.end())
    }

    pub fn function(&self) -> &ScaleFunction {
        &self.function
    }

    /// The `(begin, end)` values the mapper was built for.
    pub fn domain(&self) -> (f64, f64) {
        (self.begin, self.end)
    }

    pub const fn precision_class(&self) -> PrecisionClass {
        tolerance_class(&self.function)
    }

    /// Normalized position of `value`.
    pub fn position_opt(&self, value: f64) -> Option<N> {
        if self.span == 0.0 {
            return Some(N::zero());
        }
        let offset = self.function.transform(value) - self.origin;
        N::from(offset / self.span)
    }

    /// Domain value at normalized position `t`.
    pub fn value_opt(&self, t: N) -> Option<f64> {
        let t = t.to_f64()?;
        let coordinate = self.origin + t * self.span;
        Some(self.function.inverse(coordinate))
    }

    /// Like [`position_opt`](Self::position_opt), NaN on failure.
    pub fn position(&self, value: f64) -> N {
        self.position_opt(value).unwrap_or_else(N::nan)
    }

    /// Like [`value_opt`](Self::value_opt), NaN on failure.
    pub fn value(&self, t: N) -> f64 {
        self.value_opt(t).unwrap_or(f64::NAN)
    }

    /// Whether positions grow with the domain value.
    ///
    /// Position runs from `0` at begin to `1` at end over a monotonic
    /// transform, so this only depends on the order of the endpoints.
    pub fn is_increasing(&self) -> bool {
        self.begin <= self.end
    }
}

/// Fraction of the scale length at which `value` lies.
pub fn position(value: f64, spec: &ScaleSpec) -> f64 {
    PositionMapper::<f64>::from_spec(spec).position(value)
}

/// Domain value at normalized `position` along the scale.
pub fn value(position: f64, spec: &ScaleSpec) -> f64 {
    PositionMapper::<f64>::from_spec(spec).value(position)
}
