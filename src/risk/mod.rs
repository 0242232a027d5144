//! Risk-bounded trade planning.

pub mod calculator;

pub use calculator::RiskCalculator;
