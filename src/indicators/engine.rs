//! Full indicator set computation over a candle window

use tracing::debug;

use crate::errors::{EngineError, Result};
use crate::models::candle::Candle;
use crate::models::indicators::IndicatorSet;

use super::ichimoku::ichimoku_default;
use super::momentum::{macd_default, rsi_default};
use super::moving_average::ema;
use super::pivots::pivot_points;
use super::trend::{detect_crossover, ema_alignment_flags, trend_direction};
use super::volatility::{atr_default, bollinger_bands_default};

/// Minimum window for a full snapshot: EMA-200 is part of the contract.
pub const MIN_CANDLES: usize = 200;

pub const EMA_SHORT: usize = 20;
pub const EMA_MEDIUM: usize = 50;
pub const EMA_LONG: usize = 200;

/// Derives the complete [`IndicatorSet`] from a candle window using the
/// default periods. Stateless; the window is borrowed, never retained.
pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute every indicator over the window. Fails fast on malformed
    /// candles or a window shorter than [`MIN_CANDLES`].
    pub fn compute(candles: &[Candle]) -> Result<IndicatorSet> {
        if candles.len() < MIN_CANDLES {
            return Err(EngineError::invalid_input(format!(
                "indicator window has {} candles, need at least {MIN_CANDLES}",
                candles.len()
            )));
        }
        if let Some(idx) = candles.iter().position(|c| !c.is_well_formed()) {
            return Err(EngineError::invalid_input(format!(
                "candle at index {idx} is malformed (non-positive or out-of-order OHLC)"
            )));
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

        let ema20 = ema(&closes, EMA_SHORT)?;
        let ema50 = ema(&closes, EMA_MEDIUM)?;
        let ema200 = ema(&closes, EMA_LONG)?;

        let last = &candles[candles.len() - 1];
        let price = last.close;
        let latest20 = IndicatorSet::latest(&ema20);
        let latest50 = IndicatorSet::latest(&ema50);
        let latest200 = IndicatorSet::latest(&ema200);

        let trend = trend_direction(price, latest20, latest50, latest200);
        let alignment = ema_alignment_flags(price, latest20, latest50, latest200);
        let crossovers = detect_crossover(&ema20, &ema50)?;

        let set = IndicatorSet {
            rsi: rsi_default(&closes)?,
            macd: macd_default(&closes)?,
            bollinger: bollinger_bands_default(&closes)?,
            atr: atr_default(&highs, &lows, &closes)?,
            ichimoku: ichimoku_default(&highs, &lows, &closes)?,
            pivots: pivot_points(last.high, last.low, last.close)?,
            ema20,
            ema50,
            ema200,
            trend,
            alignment,
            crossovers,
        };

        debug!(
            bars = candles.len(),
            price,
            trend = ?set.trend,
            "computed indicator set"
        );
        Ok(set)
    }
}
