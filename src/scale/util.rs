/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Compare two values with an absolute tolerance below one and a relative one above.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// Integer reciprocal of `step`, if it has one.
///
/// Steps such as `0.1` or `0.02` are not representable exactly, but their
/// reciprocals are. Dividing an integer index by the reciprocal gives the
/// correctly rounded tick value instead of accumulating the step's error.
pub fn integer_reciprocal(step: f64) -> Option<f64> {
    if step >= 1.0 {
        return None;
    }
    let inverse = step.recip();
    let rounded = inverse.round();
    if rounded >= 1.0 && (inverse - rounded).abs() <= 1e-9 * rounded {
        Some(rounded)
    } else {
        None
    }
}

/// Value of the `index`-th multiple of `step`, given its [`integer_reciprocal`].
pub fn nth_multiple(index: i64, step: f64, reciprocal: Option<f64>) -> f64 {
    match reciprocal {
        Some(inverse) => index as f64 / inverse,
        None => index as f64 * step,
    }
}

/// Compare two tick values with a purely relative tolerance.
pub fn same_value(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs())
}
