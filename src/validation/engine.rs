//! Confidence scoring engine

use tracing::debug;

use crate::errors::Result;
use crate::models::context::{SignalContext, StrategyId};
use crate::models::validation::{ScoreBreakdown, ValidationResult};

use super::rules::{ConstantRules, RulesProvider};
use super::scoring;
use super::weights::ValidationWeights;

/// Sub-scores below this are called out in the result notes.
const WEAK_METRIC_FLOOR: f64 = 0.6;

/// Converts a [`SignalContext`] into a weighted confidence verdict.
/// Configuration is fixed at construction; `validate` itself never fails,
/// sparse context data degrades the affected sub-scores instead.
pub struct ValidationEngine {
    weights: ValidationWeights,
    priority_strategies: Vec<StrategyId>,
    rules: Box<dyn RulesProvider>,
}

impl ValidationEngine {
    /// Build an engine from a weight set; malformed weights are the one
    /// hard failure in this module.
    pub fn new(weights: ValidationWeights) -> Result<Self> {
        weights.verify()?;
        Ok(Self {
            weights,
            priority_strategies: vec![StrategyId::Breakout, StrategyId::Momentum],
            rules: Box::new(ConstantRules::default()),
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ValidationWeights::default(),
            priority_strategies: vec![StrategyId::Breakout, StrategyId::Momentum],
            rules: Box::new(ConstantRules::default()),
        }
    }

    /// Replace the rules-compliance source.
    pub fn with_rules(mut self, rules: Box<dyn RulesProvider>) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the strategy set flagged as priority in results.
    pub fn with_priority_strategies(mut self, strategies: Vec<StrategyId>) -> Self {
        self.priority_strategies = strategies;
        self
    }

    pub fn weights(&self) -> &ValidationWeights {
        &self.weights
    }

    /// Score a context. Always returns a full breakdown and notes, even
    /// for rejected setups.
    pub fn validate(&self, context: &SignalContext) -> ValidationResult {
        let breakdown = ScoreBreakdown {
            ema_alignment: scoring::ema_alignment_score(context.price, &context.emas),
            pivot_confluence: scoring::pivot_confluence_score(
                context.price,
                context.pivots.as_ref(),
            ),
            volume_confirmation: scoring::volume_confirmation_score(
                context.volume.current,
                context.volume.average,
            ),
            candle_structure: scoring::candle_structure_score(&context.last_candle),
            context_flow: scoring::context_flow_score(context.trend, context.volatility),
        };

        let confidence = (self.weights.ema_alignment * breakdown.ema_alignment
            + self.weights.pivot_confluence * breakdown.pivot_confluence
            + self.weights.volume_confirmation * breakdown.volume_confirmation
            + self.weights.candle_structure * breakdown.candle_structure
            + self.weights.context_flow * breakdown.context_flow)
            .clamp(0.0, 1.0);

        let is_valid = confidence >= self.weights.threshold;
        let priority_override = self.priority_strategies.contains(&context.strategy);

        let mut notes = Vec::new();
        for (metric, score) in breakdown.as_map() {
            if score < WEAK_METRIC_FLOOR {
                notes.push(format!("weak {metric}: {score:.2}"));
            }
        }
        let compliance = self.rules.compliance_score(context.strategy);
        notes.push(format!("rules compliance: {compliance:.2}"));

        debug!(
            confidence,
            is_valid,
            priority_override,
            strategy = ?context.strategy,
            "validated signal context"
        );

        ValidationResult {
            confidence,
            is_valid,
            breakdown,
            priority_override,
            notes,
        }
    }
}
