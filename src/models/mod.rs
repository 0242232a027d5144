//! Value objects exchanged between the engine and its callers.
//!
//! Everything here is a plain serializable record: the engine never keeps
//! references to these across calls, so callers own them outright and may
//! persist or transmit them as-is.

pub mod candle;
pub mod context;
pub mod indicators;
pub mod trade;
pub mod validation;

pub use candle::Candle;
pub use context::{EmaSnapshot, SignalContext, StrategyId, VolumeSnapshot};
pub use indicators::{
    BollingerSeries, EmaAlignment, IchimokuSeries, IndicatorSet, MacdSeries, PivotLevels, Trend,
};
pub use trade::{
    BreakEvenDecision, Direction, KoThreshold, LeverageCheck, ProductType, RiskAssessment,
    TradePlan,
};
pub use validation::{ScoreBreakdown, ValidationResult};
