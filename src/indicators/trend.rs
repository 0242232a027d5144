//! Trend classification, EMA stack flags and crossover detection

use crate::errors::Result;
use crate::models::indicators::{EmaAlignment, Trend};

use super::validate::check_equal_len;

/// Trend from the price vs EMA stack: bullish only on a strictly ordered
/// `price > ema20 > ema50 > ema200` chain, bearish on the full reverse,
/// neutral otherwise or whenever any value is undefined.
pub fn trend_direction(
    price: f64,
    ema20: Option<f64>,
    ema50: Option<f64>,
    ema200: Option<f64>,
) -> Trend {
    let (e20, e50, e200) = match (ema20, ema50, ema200) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return Trend::Neutral,
    };
    if !price.is_finite() {
        return Trend::Neutral;
    }

    if price > e20 && e20 > e50 && e50 > e200 {
        Trend::Bullish
    } else if price < e20 && e20 < e50 && e50 < e200 {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

/// EMA stack relationship flags. Flags whose inputs are undefined stay
/// cleared.
pub fn ema_alignment_flags(
    price: f64,
    ema20: Option<f64>,
    ema50: Option<f64>,
    ema200: Option<f64>,
) -> EmaAlignment {
    let mut flags = EmaAlignment::default();

    if let (Some(e20), Some(e50), Some(e200)) = (ema20, ema50, ema200) {
        flags.perfect_bullish = price > e20 && e20 > e50 && e50 > e200;
        flags.perfect_bearish = price < e20 && e20 < e50 && e50 < e200;
        flags.above_all = price > e20 && price > e50 && price > e200;
        flags.below_all = price < e20 && price < e50 && price < e200;
    }
    if let (Some(e50), Some(e200)) = (ema50, ema200) {
        flags.golden_cross = e50 > e200;
        flags.death_cross = e50 < e200;
    }
    flags
}

/// Per-index crossover signals between two aligned series.
///
/// +1 when `a` transitions from <= to > `b`, -1 for the opposite
/// transition, 0 otherwise. Samples where either side is undefined emit 0
/// and leave the comparison state untouched.
pub fn detect_crossover(a: &[Option<f64>], b: &[Option<f64>]) -> Result<Vec<i8>> {
    check_equal_len("a", a.len(), "b", b.len())?;

    let mut out = vec![0i8; a.len()];
    let mut prev_above: Option<bool> = None;

    for i in 0..a.len() {
        let (x, y) = match (a[i], b[i]) {
            (Some(x), Some(y)) => (x, y),
            _ => continue,
        };
        let above = x > y;
        if let Some(was_above) = prev_above {
            if above && !was_above {
                out[i] = 1;
            } else if !above && was_above {
                out[i] = -1;
            }
        }
        prev_above = Some(above);
    }
    Ok(out)
}
