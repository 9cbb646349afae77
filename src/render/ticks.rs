//! Axis ranges, tick positions and tick label formatting.

use std::ops::Range;

use crate::style::ExponentFormat;

/// Target number of ticks per axis.
pub const TICK_TARGET: usize = 6;

/// Labels switch to exponent notation at or beyond these magnitudes.
const EXP_HIGH: f64 = 1e4;
const EXP_LOW: f64 = 1e-3;

/// Round `range` to 1, 2, 5 or 10 times a power of ten.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Tick spacing for a range.
pub fn tick_step(min: f64, max: f64, num_ticks: usize) -> f64 {
    let range = nice_number(max - min, false);
    nice_number(range / (num_ticks.max(2) - 1) as f64, true)
}

/// Nice tick positions inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max > min) {
        return vec![(min + max) / 2.0];
    }

    let step = tick_step(min, max, num_ticks);
    // subnormal spans round the step to zero
    if !(step > 0.0) || !step.is_finite() {
        return vec![(min + max) / 2.0];
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .map(|i| i as f64 * step)
        // -0.0 prints as "-0"
        .map(|t| if t == 0.0 { 0.0 } else { t })
        .collect()
}

/// Data range padded by 5% on both sides; degenerate inputs widen to a unit range.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return 0.0..1.0;
    }
    if lo == hi {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        return (lo - pad)..(hi + pad);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

/// Decimal places needed to tell ticks `step` apart.
fn decimals_for(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

fn trim_zeros(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Format a tick label. `step` is the tick spacing, used for plain precision.
pub fn format_tick(value: f64, step: f64, format: ExponentFormat) -> String {
    let magnitude = value.abs();
    let wants_exponent = value != 0.0 && (magnitude >= EXP_HIGH || magnitude < EXP_LOW);

    if format == ExponentFormat::None || !wants_exponent {
        return trim_zeros(format!("{:.*}", decimals_for(step), value));
    }

    let exponent = magnitude.log10().floor() as i32;
    match format {
        ExponentFormat::Si => format_si(value, exponent),
        _ => {
            let mantissa = trim_zeros(format!("{:.3}", value / 10_f64.powi(exponent)));
            match format {
                ExponentFormat::LowerE => format!("{mantissa}e{exponent:+}"),
                ExponentFormat::UpperE => format!("{mantissa}E{exponent:+}"),
                _ => format!("{mantissa}×10^{exponent}"),
            }
        }
    }
}

fn format_si(value: f64, exponent: i32) -> String {
    const PREFIXES: [(i32, &str); 8] = [
        (12, "T"),
        (9, "G"),
        (6, "M"),
        (3, "k"),
        (0, ""),
        (-3, "m"),
        (-6, "µ"),
        (-9, "n"),
    ];

    let power = (exponent.div_euclid(3) * 3).clamp(-9, 12);
    let prefix = PREFIXES
        .iter()
        .find(|(p, _)| *p == power)
        .map(|(_, s)| *s)
        .unwrap_or("");
    let scaled = trim_zeros(format!("{:.3}", value / 10_f64.powi(power)));
    format!("{scaled}{prefix}")
}
