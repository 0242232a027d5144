//! Trade planning value objects

use serde::{Deserialize, Serialize};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Direction implied by entry relative to stop: entry above stop is long.
    pub fn infer(entry: f64, stop_loss: f64) -> Self {
        if entry > stop_loss {
            Direction::Long
        } else {
            Direction::Short
        }
    }
}

/// Leveraged product type, each with its own leverage cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    Cfd,
    Ko,
    Futures,
}

impl ProductType {
    pub fn max_leverage(&self) -> f64 {
        match self {
            ProductType::Cfd => 30.0,
            ProductType::Ko => 10.0,
            ProductType::Futures => 20.0,
        }
    }
}

/// Leverage against balance, checked against the product cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverageCheck {
    pub leverage: f64,
    pub max_allowed: f64,
    pub is_safe: bool,
}

/// Knock-out certificate barrier placed beyond the stop with a safety
/// buffer, plus the leverage the barrier distance implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KoThreshold {
    pub threshold: f64,
    pub ko_leverage: f64,
    pub warnings: Vec<String>,
}

/// Risk check for a concrete position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_amount: f64,
    /// Risk as a percentage of balance.
    pub risk_percentage: f64,
    pub leverage: f64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub is_valid: bool,
}

/// Whether the stop should be moved to break-even, and where.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenDecision {
    /// Signed profit expressed in R-multiples.
    pub current_r: f64,
    pub should_move: bool,
    pub recommended_stop: f64,
}

/// Complete risk-bounded trade plan. Produced once per calculation, fully
/// reproducible from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub position_size: f64,
    pub risk_amount: f64,
    pub risk_percentage: f64,
    pub leverage: f64,
    pub break_even_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ko: Option<KoThreshold>,
    pub is_valid: bool,
    pub warnings: Vec<String>,
}
