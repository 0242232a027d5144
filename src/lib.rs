//! Signal validation and risk engine.
//!
//! Three stateless units used by every trading-decision agent:
//! - [`indicators`]: pure numeric transforms over OHLC price series
//! - [`validation`]: weighted confidence scoring over a [`models::context::SignalContext`]
//! - [`risk`]: risk-bounded trade planning from an approved entry/stop
//!
//! No I/O, no shared mutable state. Every operation is a pure function of
//! its inputs plus the read-only configuration fixed at construction, so
//! callers may invoke anything concurrently without coordination.

pub mod errors;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod risk;
pub mod validation;

pub use errors::{EngineError, Result};
