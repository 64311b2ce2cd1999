//! Slide rule scale engine
//!
//! `sliderule` computes where values sit along a slide rule scale and which
//! graduations (tick marks) the scale carries. It covers the mathematics of a
//! scale only; drawing, fonts and the catalogue of named rules live elsewhere.
//!
//! # Core Concepts
//!
//! ## Transform functions
//!
//! Every scale is driven by a monotonic [`ScaleFunction`] (log10, square,
//! cube, sine, log-log, ...) together with its inverse. A value's normalized
//! position is linear in the function's coordinate space between the scale's
//! begin and end values.
//!
//! ## Scale specifications
//!
//! A [`ScaleSpec`] describes one scale declaratively: its function and range,
//! a list of [`TickRegion`]s giving up to four interval sizes per sub-range,
//! a [`LabelRenderer`], reference constants and an optional decade
//! repetition for multi-decade scales.
//!
//! ## Tick generation
//!
//! [`generate_ticks`] sweeps every region and level, merges coinciding marks
//! and returns them in ascending value order, so positions run from begin to
//! end on scales declared with `begin < end` and from end to begin otherwise. [`generate_many`] does the same for a
//! batch of independent scales in parallel.
//!
//! ## Precision
//!
//! Each function belongs to a [`PrecisionClass`] fixing the round-trip
//! tolerance of `value(position(x))`. [`CursorPrecision`] derives how many
//! decimals a cursor readout shows from the local graduation density.
//!
//! # Examples
//!
//! ## Positions
//!
//! ```rust
//! use sliderule::{ScaleFunction, ScaleSpec, position, value};
//!
//! let c = ScaleSpec::new("C", ScaleFunction::Log10, 1.0, 10.0);
//!
//! assert_eq!(position(1.0, &c), 0.0);
//! assert_eq!(position(10.0, &c), 1.0);
//! assert!((value(2f64.log10(), &c) - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Ticks
//!
//! ```rust
//! use sliderule::{LabelRenderer, ScaleFunction, ScaleSpec, TickRegion, generate_ticks};
//!
//! let c = ScaleSpec::new("C", ScaleFunction::Log10, 1.0, 10.0)
//!     .with_renderer(LabelRenderer::Mantissa)
//!     .with_regions(vec![
//!         TickRegion::new(1.0, [Some(1.0), Some(0.1), Some(0.05), Some(0.01)]),
//!         TickRegion::new(2.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.02)]),
//!         TickRegion::new(4.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]),
//!     ]);
//! c.validate().unwrap();
//!
//! let ticks = generate_ticks(&c);
//! let majors: Vec<_> = ticks.iter().filter(|t| t.level == 0).collect();
//! assert_eq!(majors.len(), 10);
//! assert_eq!(majors[1].label.as_deref(), Some("2"));
//! ```
//!
//! ## Cursor readings
//!
//! ```rust
//! use sliderule::{RuleLayout, ScaleFunction, ScaleSpec, SlideScale, TickRegion};
//!
//! let spec = ScaleSpec::new("A", ScaleFunction::Square, 1.0, 100.0)
//!     .with_region(TickRegion::new(1.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]))
//!     .with_region(TickRegion::new(10.0, [Some(10.0), Some(5.0), Some(1.0), Some(0.5)]));
//! let scale = SlideScale::<f64>::new(spec).unwrap();
//! let layout = RuleLayout::<f64, f64>::new(&scale, 0.0, 250.0);
//!
//! let reading = layout.reading(layout.to_offset(20.0));
//! assert!((reading.value - 20.0).abs() < 1e-9);
//! assert_eq!(reading.text, "20.00");
//! ```

pub mod function;
pub mod label;
pub mod layout;
pub mod precision;
pub mod scale;

pub use num_traits::Float;

pub use function::ScaleFunction;
pub use label::{LabelRenderer, LabelSize};
pub use layout::{CursorReading, RuleLayout};
pub use precision::{
    CursorPrecision, DISPLAY_TOLERANCE, PrecisionClass, round_trip_tolerance, tolerance_class,
};
pub use scale::{
    ConstantMark, Cycles, PositionMapper, Scale, ScaleConstant, ScaleSpec, SlideScale, SpecError,
    TickEngine, TickMark, TickRegion, generate_many, generate_ticks, place_constants, position,
    value,
};
