//! Volatility indicators: Bollinger Bands and ATR

use crate::errors::{EngineError, Result};
use crate::models::indicators::BollingerSeries;

use super::moving_average::{ema, sma};
use super::validate::{check_equal_len, check_period, check_series};

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STDDEV: f64 = 2.0;
pub const ATR_PERIOD: usize = 14;

/// Bollinger Bands: SMA middle band +/- `stddev` sample standard
/// deviations (n-1 denominator) of the trailing window.
pub fn bollinger_bands(series: &[f64], period: usize, stddev: f64) -> Result<BollingerSeries> {
    if period < 2 {
        return Err(EngineError::invalid_input(
            "bollinger period must be >= 2 for a sample standard deviation",
        ));
    }
    if !stddev.is_finite() || stddev < 0.0 {
        return Err(EngineError::invalid_input(
            "bollinger stddev multiplier must be finite and non-negative",
        ));
    }
    check_series("bollinger", series, period)?;

    let middle = sma(series, period)?;
    let mut upper = vec![None; series.len()];
    let mut lower = vec![None; series.len()];

    for i in period - 1..series.len() {
        let window = &series[i + 1 - period..=i];
        let mean = match middle[i] {
            Some(m) => m,
            None => continue,
        };
        let variance =
            window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
        let band = stddev * variance.sqrt();
        upper[i] = Some(mean + band);
        lower[i] = Some(mean - band);
    }

    Ok(BollingerSeries {
        upper,
        middle,
        lower,
    })
}

/// Bollinger Bands with the default (20, 2.0) parameters.
pub fn bollinger_bands_default(series: &[f64]) -> Result<BollingerSeries> {
    bollinger_bands(series, BOLLINGER_PERIOD, BOLLINGER_STDDEV)
}

/// Average True Range: per-bar true range smoothed with an EMA.
///
/// TR = max(high - low, |high - prev close|, |low - prev close|); the first
/// bar has no previous close, so its TR is just high - low.
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    check_period("atr", period)?;
    check_equal_len("high", high.len(), "low", low.len())?;
    check_equal_len("high", high.len(), "close", close.len())?;
    check_series("atr high", high, period)?;
    check_series("atr low", low, period)?;
    check_series("atr close", close, period)?;

    let mut true_ranges = Vec::with_capacity(high.len());
    true_ranges.push(high[0] - low[0]);
    for i in 1..high.len() {
        let tr = (high[i] - low[i])
            .max((high[i] - close[i - 1]).abs())
            .max((low[i] - close[i - 1]).abs());
        true_ranges.push(tr);
    }

    ema(&true_ranges, period)
}

/// ATR with the default 14-bar period.
pub fn atr_default(high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<Option<f64>>> {
    atr(high, low, close, ATR_PERIOD)
}
