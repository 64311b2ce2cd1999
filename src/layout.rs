//! Physical placement of scales along a rule body.
//!
//! A [`RuleLayout`] ties a [`Scale`] to a physical span, measured in whatever
//! unit the caller draws in (millimetres, pixels, ...). It converts domain
//! values to offsets along the rule and turns a cursor offset back into a
//! [`CursorReading`].
//!
//! # Coordinate Spaces
//!
//! 1. **Domain**: the values printed on the scale
//! 2. **Normalized**: `[0, 1]` along the scale, handled by the scale itself
//! 3. **Offset**: physical distance from the rule's reference edge
//!
//! # Examples
//!
//! ```rust
//! use sliderule::{LabelRenderer, RuleLayout, ScaleFunction, ScaleSpec, SlideScale, TickRegion};
//!
//! let spec = ScaleSpec::new("D", ScaleFunction::Log10, 1.0, 10.0)
//!     .with_renderer(LabelRenderer::Mantissa)
//!     .with_region(TickRegion::new(1.0, [Some(1.0), Some(0.1), Some(0.02)]));
//! let scale = SlideScale::<f64>::new(spec).unwrap();
//!
//! // 250 mm scale starting 10 mm from the edge of the stock
//! let layout = RuleLayout::<f64, f64>::new(&scale, 10.0, 250.0);
//! assert_eq!(layout.to_offset(1.0), 10.0);
//! assert_eq!(layout.to_offset(10.0), 260.0);
//!
//! let reading = layout.reading(10.0 + 250.0 * 2f64.log10());
//! assert!((reading.value - 2.0).abs() < 1e-9);
//! assert_eq!(reading.text, "2.000");
//! ```

use num_traits::Float;

use crate::scale::{Scale, TickMark};

/// What a cursor at a given offset reads on one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorReading<N = f64> {
    /// Normalized position under the cursor.
    pub position: N,
    /// Domain value under the cursor.
    pub value: f64,
    /// The value formatted with the scale's cursor precision.
    pub text: String,
}

/// Maps one scale onto a physical span of the rule.
///
/// # Type Parameters
///
/// - `N`: Normalized type of the scale
/// - `S`: Offset type (typically `f32` for drawing)
///
/// # Method Variants
///
/// - `method_opt()` returns `None` when a conversion between numeric types fails
/// - `method()` falls back to NaN instead
#[derive(Clone, Copy)]
pub struct RuleLayout<'a, N = f64, S = f32> {
    scale: &'a dyn Scale<Normalized = N>,
    origin: S,
    length: S,
}

impl<'a, N, S: Copy> RuleLayout<'a, N, S> {
    /// Places `scale` so that its begin value sits at `origin` and its end
    /// value at `origin + length`.
    pub const fn new(scale: &'a dyn Scale<Normalized = N>, origin: S, length: S) -> Self {
        Self {
            scale,
            origin,
            length,
        }
    }

    pub const fn origin(&self) -> S {
        self.origin
    }

    pub const fn length(&self) -> S {
        self.length
    }
}

impl<N, S> RuleLayout<'_, N, S>
where
    N: Float,
    S: Float,
{
    /// Offsets of the scale's two ends, `(begin, end)`.
    pub fn extent(&self) -> (S, S) {
        (self.origin, self.origin + self.length)
    }

    /// Physical offset of domain `value`.
    pub fn to_offset_opt(&self, value: f64) -> Option<S> {
        let t: N = self.scale.normalize_opt(value)?;
        let t: S = S::from(t)?;
        Some(self.origin + t * self.length)
    }

    /// Physical offset of domain `value`, NaN on failure.
    pub fn to_offset(&self, value: f64) -> S {
        self.to_offset_opt(value).unwrap_or_else(S::nan)
    }

    /// Normalized position under physical `offset`.
    pub fn position_at_opt(&self, offset: S) -> Option<N> {
        N::from((offset - self.origin) / self.length)
    }

    /// Domain value under physical `offset`.
    pub fn value_at_opt(&self, offset: S) -> Option<f64> {
        let t = self.position_at_opt(offset)?;
        self.scale.denormalize_opt(t)
    }

    /// Domain value under physical `offset`, NaN on failure.
    pub fn value_at(&self, offset: S) -> f64 {
        self.value_at_opt(offset).unwrap_or(f64::NAN)
    }

    /// Cursor reading at physical `offset`.
    pub fn reading_opt(&self, offset: S) -> Option<CursorReading<N>> {
        let position = self.position_at_opt(offset)?;
        let value = self.scale.denormalize_opt(position)?;
        Some(CursorReading {
            position,
            value,
            text: self.scale.format_value(value),
        })
    }

    /// Cursor reading at physical `offset`; position and value are NaN on failure.
    pub fn reading(&self, offset: S) -> CursorReading<N> {
        self.reading_opt(offset).unwrap_or_else(|| CursorReading {
            position: N::nan(),
            value: f64::NAN,
            text: self.scale.format_value(f64::NAN),
        })
    }

    /// The scale's tick marks paired with their physical offsets.
    pub fn tick_offsets(&self) -> Vec<(S, TickMark<N>)> {
        self.scale
            .ticks()
            .into_iter()
            .map(|tick| {
                let offset = S::from(tick.position)
                    .map_or_else(S::nan, |t| self.origin + t * self.length);
                (offset, tick)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::ScaleFunction;
    use crate::label::LabelRenderer;
    use crate::scale::{ScaleSpec, SlideScale, TickRegion};

    fn d_scale() -> SlideScale<f64> {
        let spec = ScaleSpec::new("D", ScaleFunction::Log10, 1.0, 10.0)
            .with_renderer(LabelRenderer::Mantissa)
            .with_regions(vec![
                TickRegion::new(1.0, [Some(1.0), Some(0.1), Some(0.05), Some(0.01)]),
                TickRegion::new(2.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.02)]),
                TickRegion::new(4.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]),
            ]);
        SlideScale::new(spec).unwrap()
    }

    #[test]
    fn test_offsets_span_the_layout() {
        let scale = d_scale();
        let layout = RuleLayout::<f64, f64>::new(&scale, 10.0, 250.0);

        assert_eq!(layout.extent(), (10.0, 260.0));
        assert_eq!(layout.to_offset(1.0), 10.0);
        assert_eq!(layout.to_offset(10.0), 260.0);
        assert!((layout.to_offset(10f64.sqrt()) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_at_inverts_to_offset() {
        let scale = d_scale();
        let layout = RuleLayout::<f64, f64>::new(&scale, 10.0, 250.0);

        for value in [1.0, 1.5, 2.0, 3.7, 9.99] {
            let offset = layout.to_offset(value);
            assert!((layout.value_at(offset) - value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_f32_offsets() {
        let scale = d_scale();
        let layout = RuleLayout::<f64, f32>::new(&scale, 0.0, 800.0);

        let offset: f32 = layout.to_offset(10f64.sqrt());
        assert!((offset - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_reading_uses_region_precision() {
        let scale = d_scale();
        let layout = RuleLayout::<f64, f64>::new(&scale, 0.0, 1.0);

        let reading = layout.reading(1.5f64.log10());
        assert!((reading.value - 1.5).abs() < 1e-12);
        assert!((reading.position - 1.5f64.log10()).abs() < 1e-15);
        assert_eq!(reading.text, "1.500");
    }

    #[test]
    fn test_reading_beyond_the_scale() {
        let scale = d_scale();
        let layout = RuleLayout::<f64, f64>::new(&scale, 0.0, 1.0);

        // past the end of the scale the default precision applies
        let reading = layout.reading(1.5);
        assert!(reading.value > 10.0);
        assert_eq!(reading.text.split('.').nth(1).map(str::len), Some(2));
    }

    #[test]
    fn test_tick_offsets_follow_ticks() {
        let scale = d_scale();
        let layout = RuleLayout::<f64, f64>::new(&scale, 5.0, 100.0);
        let ticks = layout.tick_offsets();

        assert_eq!(ticks.len(), scale.ticks().len());
        assert_eq!(ticks.first().map(|(offset, _)| *offset), Some(5.0));
        assert_eq!(ticks.last().map(|(offset, _)| *offset), Some(105.0));
        assert!(ticks.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}
