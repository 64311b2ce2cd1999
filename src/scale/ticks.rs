use num_traits::Float;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::mapper::PositionMapper;
use super::spec::{ScaleSpec, TickRegion};
use super::util;
use super::{ConstantMark, TickMark};

/// Upper bound on the candidates a single level of a region may enumerate.
const MAX_TICKS_PER_SWEEP: usize = 100_000;

/// Fraction of a step a candidate may overshoot its sweep bounds by.
const SWEEP_SLACK: f64 = 1e-6;

/// Largest sweep index whose multiples stay distinct in `f64` (2^53).
const MAX_SWEEP_INDEX: f64 = 9_007_199_254_740_992.0;

/// Index-based walk over the multiples of one interval inside `[lo, hi]`.
///
/// Values are computed from the index rather than accumulated, and values
/// overshooting a bound by less than [`SWEEP_SLACK`] steps are clamped onto it.
struct RegionSweep {
    step: f64,
    reciprocal: Option<f64>,
    lo: f64,
    hi: f64,
    index: i64,
    last: i64,
}

impl RegionSweep {
    fn new(lo: f64, hi: f64, step: f64) -> Self {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Self::exhausted(step);
        }
        let first = (lo / step - SWEEP_SLACK).ceil();
        let last = (hi / step + SWEEP_SLACK).floor();
        if !first.is_finite() || !last.is_finite() || first > last {
            return Self::exhausted(step);
        }
        if first.abs() > MAX_SWEEP_INDEX || last.abs() > MAX_SWEEP_INDEX {
            warn!(step, lo, hi, "tick sweep index out of range, level skipped");
            return Self::exhausted(step);
        }

        let index = first as i64;
        let mut last = last as i64;
        let count = last.saturating_sub(index).saturating_add(1);
        if count > MAX_TICKS_PER_SWEEP as i64 {
            warn!(
                step,
                lo,
                hi,
                requested = count,
                kept = MAX_TICKS_PER_SWEEP,
                "tick sweep truncated"
            );
            last = index + MAX_TICKS_PER_SWEEP as i64 - 1;
        }

        Self {
            step,
            reciprocal: util::integer_reciprocal(step),
            lo,
            hi,
            index,
            last,
        }
    }

    fn exhausted(step: f64) -> Self {
        Self {
            step,
            reciprocal: None,
            lo: 0.0,
            hi: 0.0,
            index: 1,
            last: 0,
        }
    }
}

impl Iterator for RegionSweep {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.last {
            return None;
        }
        let value = util::nth_multiple(self.index, self.step, self.reciprocal);
        match self.index.checked_add(1) {
            Some(next) => self.index = next,
            None => self.last = self.index - 1,
        }
        Some(value.clamp(self.lo, self.hi))
    }
}

/// Where a region sits within one pass over the region list.
#[derive(Debug, Clone, Copy)]
struct RegionSpan {
    start: f64,
    end: f64,
    multiplier: f64,
    cycle: Option<usize>,
    owns_end: bool,
}

#[derive(Debug)]
struct Candidate {
    value: f64,
    level: u8,
    label: Option<String>,
    alt_label: Option<String>,
    owned: bool,
    cycle: Option<usize>,
    order: usize,
}

impl Candidate {
    fn is_labeled(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.is_empty())
    }

    /// Lower ranks win when candidates coincide.
    fn rank(&self) -> (u8, bool, bool, usize) {
        (self.level, !self.is_labeled(), !self.owned, self.order)
    }
}

/// Generates the graduations of one scale.
///
/// Every region is swept once per level (and once per decade on multi-decade
/// scales). Candidates that land on the same value are merged, keeping the
/// coarsest level, then a labelled one, then the one generated by the region
/// that owns the value. The output is ordered by value, so positions ascend
/// when begin < end and descend otherwise.
///
/// The engine assumes a spec that passed [`ScaleSpec::validate`]. Malformed
/// regions are skipped rather than reported.
///
/// # Examples
///
/// ```rust
/// use sliderule::{LabelRenderer, ScaleFunction, ScaleSpec, TickEngine, TickRegion};
///
/// let spec = ScaleSpec::new("L", ScaleFunction::Linear, 0.0, 10.0)
///     .with_renderer(LabelRenderer::Integer)
///     .with_region(TickRegion::new(0.0, [Some(1.0), Some(0.5)]));
///
/// let ticks = TickEngine::<f64>::new(&spec).generate();
/// assert_eq!(ticks.len(), 21);
/// assert_eq!(ticks.iter().filter(|t| t.is_labeled()).count(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct TickEngine<'a, N = f64>
where
    N: Float,
{
    spec: &'a ScaleSpec,
    mapper: PositionMapper<N>,
    tolerance: f64,
}

impl<'a, N: Float> TickEngine<'a, N> {
    pub fn new(spec: &'a ScaleSpec) -> Self {
        Self {
            spec,
            mapper: PositionMapper::from_spec(spec),
            tolerance: spec.precision_class().round_trip_tolerance(),
        }
    }

    /// Deduplicated tick marks in ascending value order.
    pub fn generate(&self) -> Vec<TickMark<N>> {
        let candidates = self.candidates();
        let emitted = candidates.len();

        let marks: Vec<TickMark<N>> = merge(candidates, self.tolerance)
            .into_iter()
            .map(|candidate| self.mark(candidate))
            .collect();
        self.check_order(&marks);

        debug!(
            scale = self.spec.name(),
            candidates = emitted,
            ticks = marks.len(),
            "generated ticks"
        );
        marks
    }

    /// The spec's constants with their positions.
    pub fn constants(&self) -> Vec<ConstantMark<N>> {
        self.spec
            .constants()
            .iter()
            .map(|constant| ConstantMark {
                value: constant.value,
                position: self.mapper.position(constant.value),
                label: constant.label.clone(),
            })
            .collect()
    }

    fn candidates(&self) -> Vec<Candidate> {
        let regions = self.spec.regions();
        let Some(first) = regions.first() else {
            return Vec::new();
        };
        let (_, hi) = self.spec.bounds();

        let passes: Vec<(Option<usize>, f64)> = match self.spec.cycles() {
            Some(cycles) => (0..cycles.count)
                .map(|index| (Some(index), cycles.multiplier(index)))
                .collect(),
            None => vec![(None, 1.0)],
        };
        let decade_end = first.start() * 10.0;

        let mut out = Vec::new();
        for (pass, &(cycle, multiplier)) in passes.iter().enumerate() {
            let last_pass = pass + 1 == passes.len();
            for (index, region) in regions.iter().enumerate() {
                let end = match regions.get(index + 1) {
                    Some(next) => next.start(),
                    None if cycle.is_some() => decade_end,
                    None => hi,
                };
                let span = RegionSpan {
                    start: region.start(),
                    end,
                    multiplier,
                    cycle,
                    owns_end: last_pass && index + 1 == regions.len(),
                };
                let before = out.len();
                self.sweep_region(region, span, &mut out);
                trace!(
                    scale = self.spec.name(),
                    region = index,
                    cycle = ?cycle,
                    start = span.start * multiplier,
                    end = span.end * multiplier,
                    emitted = out.len() - before,
                    "swept region"
                );
            }
        }
        out
    }

    fn sweep_region(&self, region: &TickRegion, span: RegionSpan, out: &mut Vec<Candidate>) {
        if span.end <= span.start {
            return;
        }
        let (lo, hi) = self.spec.bounds();
        let lo = (lo / span.multiplier).max(span.start);
        let hi = (hi / span.multiplier).min(span.end);
        if lo > hi {
            return;
        }

        let renderer = region.renderer().or(self.spec.renderer());
        for (level, step) in region.active_levels() {
            for relative in RegionSweep::new(lo, hi, step) {
                let value = relative * span.multiplier;
                let owned = span.owns_end || !util::same_value(relative, span.end, self.tolerance);
                let (label, alt_label) = match renderer {
                    Some(renderer) if region.is_labeled(level) => {
                        renderer.render_pair(value, span.cycle)
                    }
                    _ => (None, None),
                };
                out.push(Candidate {
                    value,
                    level,
                    label,
                    alt_label,
                    owned,
                    cycle: span.cycle,
                    order: out.len(),
                });
            }
        }
    }

    fn mark(&self, candidate: Candidate) -> TickMark<N> {
        let label_size = candidate
            .is_labeled()
            .then(|| self.spec.level_size(candidate.level));
        TickMark {
            value: candidate.value,
            position: self.mapper.position(candidate.value),
            level: candidate.level,
            label: candidate.label,
            alt_label: candidate.alt_label,
            label_size,
            cycle: candidate.cycle,
        }
    }

    fn check_order(&self, marks: &[TickMark<N>]) {
        let increasing = self.mapper.is_increasing();
        if let Some(index) = marks.windows(2).position(|pair| {
            if increasing {
                pair[1].position <= pair[0].position
            } else {
                pair[1].position >= pair[0].position
            }
        }) {
            warn!(
                scale = self.spec.name(),
                index,
                value = marks[index + 1].value,
                increasing,
                "tick positions are not strictly monotonic"
            );
        }
    }
}

/// Sorts candidates by value and collapses coinciding ones to the best ranked.
fn merge(mut candidates: Vec<Candidate>, tolerance: f64) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut merged: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut anchor = f64::NAN;
    for candidate in candidates {
        match merged.last_mut() {
            Some(kept) if util::same_value(anchor, candidate.value, tolerance) => {
                if candidate.rank() < kept.rank() {
                    *kept = candidate;
                }
            }
            _ => {
                anchor = candidate.value;
                merged.push(candidate);
            }
        }
    }
    merged
}

/// Tick marks of `spec` with `f64` positions.
pub fn generate_ticks(spec: &ScaleSpec) -> Vec<TickMark> {
    TickEngine::<f64>::new(spec).generate()
}

/// Constants of `spec` with `f64` positions.
pub fn place_constants(spec: &ScaleSpec) -> Vec<ConstantMark> {
    TickEngine::<f64>::new(spec).constants()
}

/// Generates the ticks of several independent scales in parallel.
///
/// The result is in the same order as `specs`.
pub fn generate_many(specs: &[ScaleSpec]) -> Vec<Vec<TickMark>> {
    specs.par_iter().map(generate_ticks).collect()
}
