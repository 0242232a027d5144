//! Validation verdict records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five weighted sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ema_alignment: f64,
    pub pivot_confluence: f64,
    pub volume_confirmation: f64,
    pub candle_structure: f64,
    pub context_flow: f64,
}

impl ScoreBreakdown {
    /// Named metric → score map, in stable order.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("candle_structure", self.candle_structure),
            ("context_flow", self.context_flow),
            ("ema_alignment", self.ema_alignment),
            ("pivot_confluence", self.pivot_confluence),
            ("volume_confirmation", self.volume_confirmation),
        ])
    }
}

/// Outcome of one validation pass. Immutable, produced once per call and a
/// pure function of the context: identical inputs yield identical results.
/// The breakdown and notes are always populated, even for rejected setups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Weighted composite confidence in [0, 1].
    pub confidence: f64,
    /// `confidence >= threshold`.
    pub is_valid: bool,
    pub breakdown: ScoreBreakdown,
    /// Informational only: the strategy is in the configured priority set.
    /// Does not alter `is_valid`.
    pub priority_override: bool,
    pub notes: Vec<String>,
}
