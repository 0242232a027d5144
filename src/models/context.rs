//! Signal evaluation context assembled by the caller

use serde::{Deserialize, Serialize};

use super::candle::Candle;
use super::indicators::{PivotLevels, Trend};

/// Closed set of strategy identifiers. Invalid strategies are rejected at
/// construction of the context, not at first use inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    TrendFollowing,
    Breakout,
    MeanReversion,
    Momentum,
    Scalping,
}

/// Latest EMA stack values. `None` means the window was too short for that
/// period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmaSnapshot {
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub ema200: Option<f64>,
}

/// Current and trailing-average volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeSnapshot {
    pub current: f64,
    pub average: f64,
}

/// Everything the validation engine needs for one evaluation. Constructed
/// fresh per call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalContext {
    pub price: f64,
    pub emas: EmaSnapshot,
    /// Pivot levels for confluence scoring. `None` when the caller has no
    /// usable levels; zero-valued levels are treated as absent.
    pub pivots: Option<PivotLevels>,
    pub volume: VolumeSnapshot,
    pub last_candle: Candle,
    pub trend: Trend,
    /// Volatility as a fraction of price (e.g. ATR / price).
    pub volatility: f64,
    pub strategy: StrategyId,
}
