//! Momentum oscillators: RSI and MACD

use crate::errors::{EngineError, Result};
use crate::models::indicators::MacdSeries;

use super::moving_average::ema;
use super::validate::{check_period, check_series};

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Relative Strength Index with Wilder smoothing.
///
/// RSI = 100 - (100 / (1 + RS)), RS = smoothed gain / smoothed loss.
/// The first `period` entries are `None`; when the smoothed loss is zero
/// the RSI saturates at 100.
pub fn rsi(series: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    check_period("rsi", period)?;
    check_series("rsi", series, period + 1)?;

    let mut out = vec![None; series.len()];

    // Seed averages from the first `period` price changes.
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = series[i] - series[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += change.abs();
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for i in period + 1..series.len() {
        let change = series[i] - series[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }
    Ok(out)
}

/// RSI with the default 14-bar period.
pub fn rsi_default(series: &[f64]) -> Result<Vec<Option<f64>>> {
    rsi(series, RSI_PERIOD)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// MACD line, signal line and histogram.
///
/// Line = EMA(fast) - EMA(slow); signal = EMA of the defined suffix of the
/// line; histogram = line - signal. Requires `fast < slow`.
pub fn macd(series: &[f64], fast: usize, slow: usize, signal: usize) -> Result<MacdSeries> {
    check_period("macd fast", fast)?;
    check_period("macd signal", signal)?;
    if fast >= slow {
        return Err(EngineError::invalid_input(format!(
            "macd fast period {fast} must be less than slow period {slow}"
        )));
    }
    check_series("macd", series, slow + signal - 1)?;

    let fast_ema = ema(series, fast)?;
    let slow_ema = ema(series, slow)?;

    let mut line = vec![None; series.len()];
    for i in 0..series.len() {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            line[i] = Some(f - s);
        }
    }

    // Signal line is an EMA over the defined suffix of the MACD line,
    // mapped back to input alignment.
    let offset = slow - 1;
    let defined: Vec<f64> = line[offset..].iter().copied().flatten().collect();
    let signal_suffix = ema(&defined, signal)?;

    let mut signal_line = vec![None; series.len()];
    for (j, value) in signal_suffix.iter().enumerate() {
        signal_line[offset + j] = *value;
    }

    let mut histogram = vec![None; series.len()];
    for i in 0..series.len() {
        if let (Some(l), Some(s)) = (line[i], signal_line[i]) {
            histogram[i] = Some(l - s);
        }
    }

    Ok(MacdSeries {
        line,
        signal: signal_line,
        histogram,
    })
}

/// MACD with the default (12, 26, 9) periods.
pub fn macd_default(series: &[f64]) -> Result<MacdSeries> {
    macd(series, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
