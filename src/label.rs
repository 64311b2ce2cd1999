//! Tick label rendering.
//!
//! A [`LabelRenderer`] turns a tick value (and, on multi-decade scales, the
//! decade cycle it belongs to) into an optional label. Returning `None`
//! suppresses the label; dense regions rely on this to stay readable.
//!
//! Renderers are plain data. They never look at previously rendered labels,
//! so the tick engine may call them in any order.
//!
//! # Examples
//!
//! ```rust
//! use sliderule::LabelRenderer;
//!
//! assert_eq!(LabelRenderer::Mantissa.render(20.0, None).as_deref(), Some("2"));
//! assert_eq!(LabelRenderer::Integer.render(1.5, None), None);
//!
//! let capacitance = LabelRenderer::Engineering { unit: "F".into(), first_exponent: -12 };
//! assert_eq!(capacitance.render(1e-12, Some(0)).as_deref(), Some("1pF"));
//! assert_eq!(capacitance.render(2e-9, Some(3)).as_deref(), Some("2nF"));
//!
//! let sine = LabelRenderer::Dual { primary: Box::new(LabelRenderer::Integer), complement: 90.0 };
//! assert_eq!(
//!     sine.render_pair(30.0, None),
//!     (Some("30".to_string()), Some("60".to_string()))
//! );
//! ```

use crate::precision::DISPLAY_TOLERANCE;

/// SI prefixes from 10^-24 up to 10^24 in steps of three decades.
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];
const SI_PREFIX_ZERO: i32 = 8;

/// Display style for the labels of a given tick level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSize {
    Large,
    Medium,
    Small,
    Tiny,
}

impl LabelSize {
    /// Default mapping from tick level to label size.
    pub const DEFAULT_LEVELS: [LabelSize; 4] = [Self::Large, Self::Medium, Self::Small, Self::Tiny];
}

/// Strategy producing tick labels.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelRenderer {
    /// Never label.
    None,
    /// Integers only; non-integral values are left unlabelled.
    Integer,
    /// Fixed number of decimals.
    Fixed { decimals: usize },
    /// Leading significant digits: `20 -> "2"`, `1.5 -> "1.5"`, `300 -> "3"`.
    Mantissa,
    /// Degrees with a trailing `°`.
    Angle { decimals: usize },
    /// Engineering value with an SI prefix chosen from the decade cycle.
    ///
    /// Cycle `k` covers the decade starting at `10^(first_exponent + k)`.
    /// Without a cycle index the prefix is derived from `first_exponent`.
    Engineering { unit: String, first_exponent: i32 },
    /// Explicit value to text lookup; values not listed are left unlabelled.
    Table(Vec<(f64, String)>),
    /// Two readings per tick, the second one being `complement - value`.
    Dual {
        primary: Box<LabelRenderer>,
        complement: f64,
    },
}

impl LabelRenderer {
    /// Label for `value` in decade `cycle`, or `None` to suppress it.
    pub fn render(&self, value: f64, cycle: Option<usize>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Integer => {
                let rounded = value.round();
                ((value - rounded).abs() <= DISPLAY_TOLERANCE).then(|| format_trimmed(rounded, 0))
            }
            Self::Fixed { decimals } => Some(format_trimmed(value, *decimals)),
            Self::Mantissa => mantissa(value).map(|m| format_trimmed(m, 4)),
            Self::Angle { decimals } => Some(format!("{}°", format_trimmed(value, *decimals))),
            Self::Engineering {
                unit,
                first_exponent,
            } => engineering(value, unit, *first_exponent, cycle),
            Self::Table(entries) => entries
                .iter()
                .find(|(key, _)| (key - value).abs() <= DISPLAY_TOLERANCE * key.abs().max(1.0))
                .map(|(_, text)| text.clone()),
            Self::Dual { primary, .. } => primary.render(value, cycle),
        }
    }

    /// Primary and secondary labels; only [`LabelRenderer::Dual`] yields a secondary one.
    pub fn render_pair(&self, value: f64, cycle: Option<usize>) -> (Option<String>, Option<String>) {
        match self {
            Self::Dual {
                primary,
                complement,
            } => (
                primary.render(value, cycle),
                primary.render(complement - value, cycle),
            ),
            other => (other.render(value, cycle), None),
        }
    }
}

/// Formats with at most `decimals` decimals, dropping trailing zeros.
fn format_trimmed(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    // normalize `-0`
    if text == "-0" { "0".to_string() } else { text }
}

/// Scales `value` into `[1, 10)`.
fn mantissa(value: f64) -> Option<f64> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    let exponent = value.abs().log10().floor();
    let scaled = value / 10f64.powf(exponent);
    // log10 may land one decade off right at a power of ten.
    let scaled = if scaled.abs() >= 10.0 - DISPLAY_TOLERANCE {
        scaled / 10.0
    } else {
        scaled
    };
    Some(scaled)
}

fn engineering(value: f64, unit: &str, first_exponent: i32, cycle: Option<usize>) -> Option<String> {
    let cycle = i32::try_from(cycle.unwrap_or(0)).ok()?;
    let (prefix, power) = si_prefix(first_exponent.checked_add(cycle)?)?;
    let shown = value / 10f64.powi(power);
    Some(format!("{}{prefix}{unit}", format_trimmed(shown, 3)))
}

/// SI prefix covering `decade`, with the power of ten it stands for.
pub(crate) fn si_prefix(decade: i32) -> Option<(&'static str, i32)> {
    let group = decade.div_euclid(3);
    let prefix = SI_PREFIXES.get(usize::try_from(group + SI_PREFIX_ZERO).ok()?)?;
    Some((prefix, group * 3))
}
