//! Indicator result records
//!
//! Per-sample indicator outputs are `Option<f64>` aligned to the input
//! length: `None` means "not yet computed" for that bar (warm-up window),
//! never a NaN sentinel.

use serde::{Deserialize, Serialize};

/// Overall trend classification derived from price vs EMA stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    pub fn is_directional(&self) -> bool {
        !matches!(self, Trend::Neutral)
    }
}

/// EMA stack relationship flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmaAlignment {
    /// price > ema20 > ema50 > ema200
    pub perfect_bullish: bool,
    /// price < ema20 < ema50 < ema200
    pub perfect_bearish: bool,
    /// price above all three EMAs
    pub above_all: bool,
    /// price below all three EMAs
    pub below_all: bool,
    /// ema50 > ema200
    pub golden_cross: bool,
    /// ema50 < ema200
    pub death_cross: bool,
}

/// MACD line / signal / histogram, aligned to the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub line: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Bollinger upper / middle / lower bands, aligned to the input series.
///
/// Invariant: `upper >= middle >= lower` wherever all three are defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// The five Ichimoku lines, raw (unshifted). Plotting offsets for the
/// Senkou spans and Chikou are a presentation concern left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IchimokuSeries {
    pub tenkan: Vec<Option<f64>>,
    pub kijun: Vec<Option<f64>>,
    pub senkou_a: Vec<Option<f64>>,
    pub senkou_b: Vec<Option<f64>>,
    pub chikou: Vec<f64>,
}

/// Classic seven-level pivot points from a prior bar's high/low/close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub pp: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

/// Full indicator snapshot for one candle window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ema20: Vec<Option<f64>>,
    pub ema50: Vec<Option<f64>>,
    pub ema200: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
    pub atr: Vec<Option<f64>>,
    pub ichimoku: IchimokuSeries,
    /// Pivot levels derived from the last completed bar.
    pub pivots: PivotLevels,
    pub trend: Trend,
    pub alignment: EmaAlignment,
    /// Per-bar EMA-20 vs EMA-50 crossover signals: +1 bullish, -1 bearish,
    /// 0 no cross.
    pub crossovers: Vec<i8>,
}

impl IndicatorSet {
    /// Latest defined value of a per-sample series, if any.
    pub fn latest(series: &[Option<f64>]) -> Option<f64> {
        series.iter().rev().find_map(|v| *v)
    }
}
