//! Shared input validation for indicator functions

use crate::errors::{EngineError, Result};

/// Reject empty series, non-finite samples and windows shorter than
/// `min_len`.
pub(crate) fn check_series(name: &str, series: &[f64], min_len: usize) -> Result<()> {
    if series.is_empty() {
        return Err(EngineError::invalid_input(format!("{name} series is empty")));
    }
    if let Some(idx) = series.iter().position(|v| !v.is_finite()) {
        return Err(EngineError::invalid_input(format!(
            "{name} series contains a non-finite value at index {idx}"
        )));
    }
    if series.len() < min_len {
        return Err(EngineError::invalid_input(format!(
            "{name} series has {} samples, need at least {min_len}",
            series.len()
        )));
    }
    Ok(())
}

pub(crate) fn check_period(name: &str, period: usize) -> Result<()> {
    if period == 0 {
        return Err(EngineError::invalid_input(format!("{name} period must be >= 1")));
    }
    Ok(())
}

/// Reject series of mismatched lengths (e.g. high/low/close triples).
pub(crate) fn check_equal_len(a_name: &str, a: usize, b_name: &str, b: usize) -> Result<()> {
    if a != b {
        return Err(EngineError::invalid_input(format!(
            "{a_name} has {a} samples but {b_name} has {b}"
        )));
    }
    Ok(())
}
