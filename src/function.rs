//! Transform functions shared by every slide rule scale.
//!
//! A [`ScaleFunction`] maps a physical value (a number, an angle, a
//! hyperbolic argument) to a one-dimensional layout coordinate and back.
//! The set of functions is closed: every scale in a catalogue is built from
//! one of these variants, optionally with a parameter such as the folding
//! factor of a folded scale.
//!
//! Coordinates are only meaningful relative to each other. The
//! [`PositionMapper`](crate::scale::PositionMapper) normalizes them against a
//! scale's begin and end values, so constant offsets in a formula never affect
//! where a tick lands.
//!
//! # Examples
//!
//! ```rust
//! use sliderule::ScaleFunction;
//!
//! let c = ScaleFunction::Log10;
//! assert!((c.transform(2.0) - 0.30103).abs() < 1e-5);
//! assert!((c.inverse(c.transform(2.0)) - 2.0).abs() < 1e-12);
//!
//! // Angles are in degrees.
//! let s = ScaleFunction::Sine;
//! assert!((s.transform(90.0) - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;

/// Forward/inverse pair describing how a scale lays out its values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleFunction {
    /// `x`; the L scale and plain linear rules.
    Linear,
    /// `log10(x)`; the C and D scales and multi-decade engineering scales.
    Log10,
    /// `log10(x) / 2`; the A and B scales.
    Square,
    /// `log10(cbrt(x))`; the K scale.
    Cube,
    /// `1 - log10(x)`; the CI scale.
    Reciprocal,
    /// `log10(x / factor)`; folded scales such as CF/DF (folded at π).
    Folded {
        /// Value placed at coordinate zero.
        factor: f64,
    },
    /// `log10(100 · x · π / 180)`; the ST small-angle scale, `x` in degrees.
    SmallAngle,
    /// `log10(10 · sin x)`, `x` in degrees.
    Sine,
    /// `log10(10 · tan x)`, `x` in degrees.
    Tangent,
    /// `log10(10 · sinh x)`.
    Sinh,
    /// `log10(10 · tanh x)`.
    Tanh,
    /// `log10(sqrt(1 - x²))`; the P scale.
    Pythagorean,
    /// `log10(ln x)`; the LL1..LL3 scales, `x > 1`.
    LogLog,
    /// `log10(-ln x)`; the LL0x scales, `0 < x < 1`.
    NegLogLog,
}

impl ScaleFunction {
    /// Maps a domain value to its layout coordinate.
    pub fn transform(&self, x: f64) -> f64 {
        match *self {
            Self::Linear => x,
            Self::Log10 => x.log10(),
            Self::Square => x.log10() / 2.0,
            Self::Cube => x.cbrt().log10(),
            Self::Reciprocal => 1.0 - x.log10(),
            Self::Folded { factor } => (x / factor).log10(),
            Self::SmallAngle => (100.0 * x * PI / 180.0).log10(),
            Self::Sine => (10.0 * x.to_radians().sin()).log10(),
            Self::Tangent => (10.0 * x.to_radians().tan()).log10(),
            Self::Sinh => (10.0 * x.sinh()).log10(),
            Self::Tanh => (10.0 * x.tanh()).log10(),
            Self::Pythagorean => (1.0 - x * x).sqrt().log10(),
            Self::LogLog => x.ln().log10(),
            Self::NegLogLog => (-x.ln()).log10(),
        }
    }

    /// Recovers the domain value from a layout coordinate.
    pub fn inverse(&self, y: f64) -> f64 {
        match *self {
            Self::Linear => y,
            Self::Log10 => 10f64.powf(y),
            Self::Square => 10f64.powf(2.0 * y),
            Self::Cube => 10f64.powf(y).powi(3),
            Self::Reciprocal => 10f64.powf(1.0 - y),
            Self::Folded { factor } => factor * 10f64.powf(y),
            Self::SmallAngle => 10f64.powf(y) * 180.0 / (100.0 * PI),
            Self::Sine => (10f64.powf(y) / 10.0).asin().to_degrees(),
            Self::Tangent => (10f64.powf(y) / 10.0).atan().to_degrees(),
            Self::Sinh => (10f64.powf(y) / 10.0).asinh(),
            Self::Tanh => (10f64.powf(y) / 10.0).atanh(),
            Self::Pythagorean => (1.0 - 10f64.powf(2.0 * y)).sqrt(),
            Self::LogLog => 10f64.powf(y).exp(),
            Self::NegLogLog => (-10f64.powf(y)).exp(),
        }
    }

    /// Number of nested transcendental operations in the forward/inverse pair.
    ///
    /// Zero for algebraic layouts, one for a single logarithm, two when a
    /// logarithm wraps a trigonometric, hyperbolic or root function, three
    /// for logarithms of logarithms.
    pub const fn composition_depth(&self) -> u8 {
        match self {
            Self::Linear => 0,
            Self::Log10
            | Self::Square
            | Self::Reciprocal
            | Self::Folded { .. }
            | Self::SmallAngle => 1,
            Self::Cube
            | Self::Sine
            | Self::Tangent
            | Self::Sinh
            | Self::Tanh
            | Self::Pythagorean => 2,
            Self::LogLog | Self::NegLogLog => 3,
        }
    }

    /// Returns `true` if `value` lies inside the function's mathematical domain.
    ///
    /// Used by specification validation only; the transform itself never
    /// checks its input.
    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match *self {
            Self::Linear => true,
            Self::Log10 | Self::Square | Self::Cube | Self::Reciprocal | Self::SmallAngle => {
                value > 0.0
            }
            Self::Folded { factor } => factor != 0.0 && value / factor > 0.0,
            Self::Sine => value > 0.0 && value <= 90.0,
            Self::Tangent => value > 0.0 && value < 90.0,
            Self::Sinh => value > 0.0,
            Self::Tanh => value > 0.0,
            Self::Pythagorean => value.abs() < 1.0,
            Self::LogLog => value > 1.0,
            Self::NegLogLog => value > 0.0 && value < 1.0,
        }
    }
}
