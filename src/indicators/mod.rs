//! Pure numeric transforms over price/volume series.
//!
//! Every function validates its input (no empty, NaN or Inf samples, no
//! window shorter than the indicator needs) and fails fast with
//! [`crate::EngineError::InvalidInput`]; nothing here mutates its input or
//! holds state between calls.

pub mod engine;
pub mod ichimoku;
pub mod momentum;
pub mod moving_average;
pub mod pivots;
pub mod trend;
mod validate;
pub mod volatility;

pub use engine::IndicatorEngine;
pub use ichimoku::{ichimoku, ichimoku_default};
pub use momentum::{macd, macd_default, rsi, rsi_default};
pub use moving_average::{ema, sma};
pub use pivots::pivot_points;
pub use trend::{detect_crossover, ema_alignment_flags, trend_direction};
pub use volatility::{atr, atr_default, bollinger_bands, bollinger_bands_default};
