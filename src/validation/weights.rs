//! Metric weights and confidence threshold

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};

/// Tolerance on the weight sum check.
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// The five metric weights plus the acceptance threshold. Immutable once
/// constructed; reconfiguring means constructing a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationWeights {
    pub ema_alignment: f64,
    pub pivot_confluence: f64,
    pub volume_confirmation: f64,
    pub candle_structure: f64,
    pub context_flow: f64,
    /// Minimum confidence for `is_valid`.
    pub threshold: f64,
}

impl Default for ValidationWeights {
    fn default() -> Self {
        Self {
            ema_alignment: 0.25,
            pivot_confluence: 0.20,
            volume_confirmation: 0.20,
            candle_structure: 0.20,
            context_flow: 0.15,
            threshold: 0.8,
        }
    }
}

impl ValidationWeights {
    pub fn sum(&self) -> f64 {
        self.ema_alignment
            + self.pivot_confluence
            + self.volume_confirmation
            + self.candle_structure
            + self.context_flow
    }

    /// Reject weight sets that do not sum to 1.0 (within tolerance),
    /// negative weights, and thresholds outside [0, 1].
    pub fn verify(&self) -> Result<()> {
        let weights = [
            self.ema_alignment,
            self.pivot_confluence,
            self.volume_confirmation,
            self.candle_structure,
            self.context_flow,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(EngineError::configuration(
                "metric weights must be finite and non-negative",
            ));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::configuration(format!(
                "metric weights sum to {sum:.4}, expected 1.0 +/- {WEIGHT_SUM_TOLERANCE}"
            )));
        }
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(EngineError::configuration(format!(
                "confidence threshold {} outside [0, 1]",
                self.threshold
            )));
        }
        Ok(())
    }
}
