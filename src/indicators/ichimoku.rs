//! Ichimoku Cloud lines

use crate::errors::Result;
use crate::models::indicators::IchimokuSeries;

use super::validate::{check_equal_len, check_period, check_series};

pub const TENKAN_PERIOD: usize = 9;
pub const KIJUN_PERIOD: usize = 26;
pub const SENKOU_B_PERIOD: usize = 52;

/// The five Ichimoku lines, raw (unshifted).
///
/// Tenkan and Kijun are rolling high/low midpoints over their windows;
/// Senkou Span A is the Tenkan/Kijun midpoint, Senkou Span B the midpoint
/// over the `senkou_b` window. Chikou is the close series itself; the
/// conventional forward/backward plot offsets are left to the caller.
pub fn ichimoku(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    tenkan: usize,
    kijun: usize,
    senkou_b: usize,
) -> Result<IchimokuSeries> {
    check_period("ichimoku tenkan", tenkan)?;
    check_period("ichimoku kijun", kijun)?;
    check_period("ichimoku senkou_b", senkou_b)?;
    check_equal_len("high", high.len(), "low", low.len())?;
    check_equal_len("high", high.len(), "close", close.len())?;
    let min_len = tenkan.max(kijun).max(senkou_b);
    check_series("ichimoku high", high, min_len)?;
    check_series("ichimoku low", low, min_len)?;
    check_series("ichimoku close", close, min_len)?;

    let tenkan_line = rolling_midpoint(high, low, tenkan);
    let kijun_line = rolling_midpoint(high, low, kijun);

    let mut senkou_a = vec![None; high.len()];
    for i in 0..high.len() {
        if let (Some(t), Some(k)) = (tenkan_line[i], kijun_line[i]) {
            senkou_a[i] = Some((t + k) / 2.0);
        }
    }

    Ok(IchimokuSeries {
        tenkan: tenkan_line,
        kijun: kijun_line,
        senkou_a,
        senkou_b: rolling_midpoint(high, low, senkou_b),
        chikou: close.to_vec(),
    })
}

/// Ichimoku with the default (9, 26, 52) windows.
pub fn ichimoku_default(high: &[f64], low: &[f64], close: &[f64]) -> Result<IchimokuSeries> {
    ichimoku(high, low, close, TENKAN_PERIOD, KIJUN_PERIOD, SENKOU_B_PERIOD)
}

/// Midpoint of the highest high and lowest low over a trailing window.
fn rolling_midpoint(high: &[f64], low: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; high.len()];
    for i in window - 1..high.len() {
        let start = i + 1 - window;
        let highest = high[start..=i].iter().copied().fold(f64::MIN, f64::max);
        let lowest = low[start..=i].iter().copied().fold(f64::MAX, f64::min);
        out[i] = Some((highest + lowest) / 2.0);
    }
    out
}
