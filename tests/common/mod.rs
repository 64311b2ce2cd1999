#![allow(dead_code)]

use std::f64::consts::{E, PI};

use sliderule::{LabelRenderer, ScaleFunction, ScaleSpec, TickRegion};

fn c_regions() -> Vec<TickRegion> {
    vec![
        TickRegion::new(1.0, [Some(1.0), Some(0.1), Some(0.05), Some(0.01)]),
        TickRegion::new(2.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.02)]),
        TickRegion::new(4.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]),
    ]
}

pub fn c() -> ScaleSpec {
    ScaleSpec::new("C", ScaleFunction::Log10, 1.0, 10.0)
        .with_renderer(LabelRenderer::Mantissa)
        .with_regions(c_regions())
        .with_constant(PI, "π")
}

pub fn d() -> ScaleSpec {
    ScaleSpec::new("D", ScaleFunction::Log10, 1.0, 10.0)
        .with_renderer(LabelRenderer::Mantissa)
        .with_regions(c_regions())
}

pub fn ci() -> ScaleSpec {
    ScaleSpec::new("CI", ScaleFunction::Reciprocal, 10.0, 1.0)
        .with_renderer(LabelRenderer::Mantissa)
        .with_regions(c_regions())
}

pub fn cf() -> ScaleSpec {
    ScaleSpec::new("CF", ScaleFunction::Folded { factor: PI }, PI, 10.0 * PI)
        .with_renderer(LabelRenderer::Integer)
        .with_regions(vec![
            TickRegion::new(3.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]),
            TickRegion::new(10.0, [Some(10.0), Some(5.0), Some(1.0), Some(0.5)]),
        ])
        .with_constant(PI, "π")
        .with_constant(10.0, "10")
}

pub fn a() -> ScaleSpec {
    ScaleSpec::new("A", ScaleFunction::Square, 1.0, 100.0)
        .with_renderer(LabelRenderer::Integer)
        .with_regions(vec![
            TickRegion::new(1.0, [Some(1.0), Some(0.5), Some(0.1), Some(0.05)]),
            TickRegion::new(2.0, [Some(1.0), Some(0.5), Some(0.1)]),
            TickRegion::new(5.0, [Some(1.0), Some(0.5), Some(0.1)]),
            TickRegion::new(10.0, [Some(10.0), Some(5.0), Some(1.0), Some(0.5)]),
            TickRegion::new(20.0, [Some(10.0), Some(5.0), Some(1.0)]),
            TickRegion::new(50.0, [Some(10.0), Some(5.0), Some(1.0)]),
        ])
}

pub fn k() -> ScaleSpec {
    ScaleSpec::new("K", ScaleFunction::Cube, 1.0, 1000.0)
        .with_renderer(LabelRenderer::Integer)
        .with_regions(vec![
            TickRegion::new(1.0, [Some(1.0), Some(0.5), Some(0.1)]),
            TickRegion::new(3.0, [Some(1.0), Some(0.5)]),
            TickRegion::new(10.0, [Some(10.0), Some(5.0), Some(1.0)]),
            TickRegion::new(30.0, [Some(10.0), Some(5.0)]),
            TickRegion::new(100.0, [Some(100.0), Some(50.0), Some(10.0)]),
            TickRegion::new(300.0, [Some(100.0), Some(50.0)]),
        ])
}

pub fn s() -> ScaleSpec {
    ScaleSpec::new("S", ScaleFunction::Sine, 5.7392, 90.0)
        .with_renderer(LabelRenderer::Dual {
            primary: Box::new(LabelRenderer::Integer),
            complement: 90.0,
        })
        .with_regions(vec![
            TickRegion::new(5.5, [Some(1.0), Some(0.5), Some(0.1)]),
            TickRegion::new(10.0, [Some(5.0), Some(1.0), Some(0.5)]),
            TickRegion::new(20.0, [Some(10.0), Some(5.0), Some(1.0)]),
            TickRegion::new(60.0, [Some(10.0), Some(5.0)]),
            TickRegion::new(80.0, [Some(10.0)]),
        ])
}

pub fn t() -> ScaleSpec {
    ScaleSpec::new("T", ScaleFunction::Tangent, 5.7106, 45.0)
        .with_renderer(LabelRenderer::Integer)
        .with_regions(vec![
            TickRegion::new(5.5, [Some(1.0), Some(0.5), Some(0.1)]),
            TickRegion::new(10.0, [Some(5.0), Some(1.0), Some(0.5)]),
            TickRegion::new(20.0, [Some(5.0), Some(1.0), Some(0.5)]),
        ])
}

pub fn ll3() -> ScaleSpec {
    ScaleSpec::new("LL3", ScaleFunction::LogLog, E, 20000.0)
        .with_renderer(LabelRenderer::Fixed { decimals: 1 })
        .with_regions(vec![
            TickRegion::new(2.5, [Some(0.5), Some(0.1), Some(0.05)]),
            TickRegion::new(3.0, [Some(1.0), Some(0.5), Some(0.1)]),
            TickRegion::new(6.0, [Some(1.0), Some(0.5)]),
            TickRegion::new(10.0, [Some(5.0), Some(1.0)]),
            TickRegion::new(20.0, [Some(10.0), Some(5.0)]),
            TickRegion::new(50.0, [Some(50.0), Some(10.0)]),
            TickRegion::new(100.0, [Some(100.0), Some(50.0)]),
            TickRegion::new(500.0, [Some(500.0), Some(100.0)]),
            TickRegion::new(1000.0, [Some(1000.0), Some(500.0)]),
            TickRegion::new(5000.0, [Some(5000.0), Some(1000.0)]),
        ])
        .with_constant(E, "e")
}

pub fn ll00() -> ScaleSpec {
    ScaleSpec::new("LL00", ScaleFunction::NegLogLog, 0.990, 0.999)
        .with_renderer(LabelRenderer::Fixed { decimals: 3 })
        .with_regions(vec![
            TickRegion::new(0.990, [Some(0.001), Some(0.0005), Some(0.0001), Some(0.00005)]),
            TickRegion::new(0.995, [Some(0.001), Some(0.0005), Some(0.0001), Some(0.00002)]),
            TickRegion::new(0.998, [Some(0.0005), Some(0.0001), Some(0.00005), Some(0.00001)]),
        ])
}

/// 1 pF to 1 µF over six decades.
pub fn capacitance() -> ScaleSpec {
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

pub fn all() -> Vec<ScaleSpec> {
    vec![c(), d(), ci(), cf(), a(), k(), s(), t(), ll3(), ll00(), capacitance()]
}
