//! Pluggable trading-rules compliance source
//!
//! Rule content (per-strategy checklists, typically loaded from files by
//! the surrounding system) lives outside the engine; the engine only
//! consumes a compliance score through this seam.

use crate::models::context::StrategyId;

/// Supplies a per-strategy rules-compliance score in [0, 1].
pub trait RulesProvider: Send + Sync {
    fn compliance_score(&self, strategy: StrategyId) -> f64;
}

/// Fixed-score provider; the default engine wiring uses full compliance.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRules(pub f64);

impl Default for ConstantRules {
    fn default() -> Self {
        Self(1.0)
    }
}

impl RulesProvider for ConstantRules {
    fn compliance_score(&self, _strategy: StrategyId) -> f64 {
        self.0.clamp(0.0, 1.0)
    }
}
