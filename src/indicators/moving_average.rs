//! SMA and EMA over full series
//!
//! Both return a series aligned to the input: the first `period - 1`
//! entries are `None` (warm-up), everything after is defined.

use crate::errors::Result;

use super::validate::{check_period, check_series};

/// Simple moving average.
pub fn sma(series: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    check_period("sma", period)?;
    check_series("sma", series, period)?;

    let mut out = vec![None; series.len()];
    let mut window_sum = 0.0;
    for (i, value) in series.iter().enumerate() {
        window_sum += value;
        if i >= period {
            window_sum -= series[i - period];
        }
        if i + 1 >= period {
            out[i] = Some(window_sum / period as f64);
        }
    }
    Ok(out)
}

/// Exponential moving average, seeded with the SMA of the first `period`
/// samples and smoothed with multiplier `2 / (period + 1)` thereafter.
pub fn ema(series: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    check_period("ema", period)?;
    check_series("ema", series, period)?;

    let mut out = vec![None; series.len()];
    let seed: f64 = series[..period].iter().sum::<f64>() / period as f64;
    let multiplier = 2.0 / (period as f64 + 1.0);

    let mut prev = seed;
    out[period - 1] = Some(seed);
    for i in period..series.len() {
        prev = (series[i] - prev) * multiplier + prev;
        out[i] = Some(prev);
    }
    Ok(out)
}
