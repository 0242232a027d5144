//! Classic pivot point levels

use crate::errors::{EngineError, Result};
use crate::models::indicators::PivotLevels;

/// Classic seven-level pivot points from a prior bar's high/low/close.
///
/// PP = (H + L + C) / 3, with three resistance and three support levels
/// derived from it. Requires `low <= close <= high`.
pub fn pivot_points(high: f64, low: f64, close: f64) -> Result<PivotLevels> {
    if !high.is_finite() || !low.is_finite() || !close.is_finite() {
        return Err(EngineError::invalid_input(
            "pivot inputs must be finite numbers",
        ));
    }
    if low > high {
        return Err(EngineError::invalid_input(format!(
            "pivot low {low} exceeds high {high}"
        )));
    }
    if close < low || close > high {
        return Err(EngineError::invalid_input(format!(
            "pivot close {close} outside [{low}, {high}]"
        )));
    }

    let pp = (high + low + close) / 3.0;
    Ok(PivotLevels {
        pp,
        r1: 2.0 * pp - low,
        r2: pp + (high - low),
        r3: high + 2.0 * (pp - low),
        s1: 2.0 * pp - high,
        s2: pp - (high - low),
        s3: low - 2.0 * (high - pp),
    })
}
