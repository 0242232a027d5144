//! Position sizing, stops, targets, leverage and trade-plan composition

use tracing::{debug, warn};

use crate::errors::{EngineError, Result};
use crate::models::trade::{
    BreakEvenDecision, Direction, KoThreshold, LeverageCheck, ProductType, RiskAssessment,
    TradePlan,
};

/// Default stop distance as a fraction of entry (0.25%).
pub const DEFAULT_STOP_DISTANCE_PCT: f64 = 0.0025;
/// Default reward-to-risk ratio.
pub const DEFAULT_RR_RATIO: f64 = 2.0;
/// Default knock-out barrier safety buffer beyond the stop (0.5%).
pub const DEFAULT_KO_BUFFER: f64 = 0.005;
/// Default R-multiple at which the stop moves to break-even.
pub const DEFAULT_BREAK_EVEN_R: f64 = 0.5;

const MAX_RISK_PER_TRADE: f64 = 0.10;
const HARD_LEVERAGE_LIMIT: f64 = 30.0;
const LEVERAGE_WARN_LIMIT: f64 = 10.0;
const KO_LEVERAGE_WARN_LIMIT: f64 = 20.0;
const MIN_RISK_PERCENTAGE_WARN: f64 = 0.1;

/// Turns an approved entry/stop into a concrete, risk-bounded trade plan.
/// Account parameters are fixed at construction and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskCalculator {
    account_balance: f64,
    risk_per_trade: f64,
    max_risk_amount: f64,
}

impl RiskCalculator {
    /// Requires a positive balance and a risk fraction in (0, 0.10].
    pub fn new(account_balance: f64, risk_per_trade: f64) -> Result<Self> {
        if !account_balance.is_finite() || account_balance <= 0.0 {
            return Err(EngineError::configuration(format!(
                "account balance must be positive, got {account_balance}"
            )));
        }
        if !risk_per_trade.is_finite()
            || risk_per_trade <= 0.0
            || risk_per_trade > MAX_RISK_PER_TRADE
        {
            return Err(EngineError::configuration(format!(
                "risk per trade must be in (0, {MAX_RISK_PER_TRADE}], got {risk_per_trade}"
            )));
        }
        Ok(Self {
            account_balance,
            risk_per_trade,
            max_risk_amount: account_balance * risk_per_trade,
        })
    }

    pub fn account_balance(&self) -> f64 {
        self.account_balance
    }

    pub fn max_risk_amount(&self) -> f64 {
        self.max_risk_amount
    }

    /// Units to buy/sell so that being stopped out loses `risk_amount`.
    pub fn position_size(&self, entry: f64, stop_loss: f64, risk_amount: f64) -> Result<f64> {
        check_price("entry", entry)?;
        check_price("stop loss", stop_loss)?;
        if !risk_amount.is_finite() || risk_amount <= 0.0 {
            return Err(EngineError::validation(format!(
                "risk amount must be positive, got {risk_amount}"
            )));
        }
        let risk_per_unit = (entry - stop_loss).abs();
        if risk_per_unit == 0.0 {
            return Err(EngineError::validation(
                "entry and stop loss must differ to size a position",
            ));
        }
        Ok(risk_amount / risk_per_unit)
    }

    /// Position size using the account's full per-trade risk budget.
    pub fn position_size_default(&self, entry: f64, stop_loss: f64) -> Result<f64> {
        self.position_size(entry, stop_loss, self.max_risk_amount)
    }

    /// Stop placed at a fixed fraction of the entry price away from it.
    pub fn stop_loss_from_distance(
        &self,
        entry: f64,
        risk_pct: f64,
        direction: Direction,
    ) -> Result<f64> {
        check_price("entry", entry)?;
        if !risk_pct.is_finite() || risk_pct <= 0.0 {
            return Err(EngineError::validation(format!(
                "stop distance fraction must be positive, got {risk_pct}"
            )));
        }
        let distance = entry * risk_pct;
        Ok(match direction {
            Direction::Long => entry - distance,
            Direction::Short => entry + distance,
        })
    }

    /// Target at `rr_ratio` times the entry-to-stop distance, on the
    /// profit side. Direction is inferred from entry vs stop.
    pub fn take_profit(&self, entry: f64, stop_loss: f64, rr_ratio: f64) -> Result<f64> {
        check_price("entry", entry)?;
        check_price("stop loss", stop_loss)?;
        if !rr_ratio.is_finite() || rr_ratio <= 0.0 {
            return Err(EngineError::validation(format!(
                "reward ratio must be positive, got {rr_ratio}"
            )));
        }
        if entry == stop_loss {
            return Err(EngineError::validation(
                "entry and stop loss must differ to place a target",
            ));
        }
        let one_r = (entry - stop_loss).abs();
        Ok(match Direction::infer(entry, stop_loss) {
            Direction::Long => entry + rr_ratio * one_r,
            Direction::Short => entry - rr_ratio * one_r,
        })
    }

    /// Leverage implied by a position value against a balance, checked
    /// against the product-type cap.
    pub fn leverage(
        &self,
        position_value: f64,
        balance: f64,
        product_type: ProductType,
    ) -> Result<LeverageCheck> {
        if !balance.is_finite() || balance <= 0.0 {
            return Err(EngineError::validation(format!(
                "balance must be positive, got {balance}"
            )));
        }
        if !position_value.is_finite() || position_value < 0.0 {
            return Err(EngineError::validation(format!(
                "position value must be non-negative, got {position_value}"
            )));
        }
        let leverage = position_value / balance;
        let max_allowed = product_type.max_leverage();
        Ok(LeverageCheck {
            leverage,
            max_allowed,
            is_safe: leverage <= max_allowed,
        })
    }

    /// Knock-out barrier beyond the stop with a safety buffer, plus the
    /// leverage that barrier distance implies. Ultra-tight stops produce a
    /// leverage warning, never a hard failure.
    pub fn ko_threshold(
        &self,
        entry: f64,
        stop_loss: f64,
        direction: Direction,
        safety_buffer: f64,
    ) -> Result<KoThreshold> {
        check_price("entry", entry)?;
        check_price("stop loss", stop_loss)?;
        if !safety_buffer.is_finite() || safety_buffer < 0.0 {
            return Err(EngineError::validation(format!(
                "safety buffer must be non-negative, got {safety_buffer}"
            )));
        }

        let threshold = match direction {
            Direction::Long => stop_loss * (1.0 - safety_buffer),
            Direction::Short => stop_loss * (1.0 + safety_buffer),
        };
        let barrier_distance = (entry - threshold).abs();
        let ko_leverage = if barrier_distance > 0.0 {
            entry / barrier_distance
        } else {
            f64::INFINITY
        };

        let mut warnings = Vec::new();
        if threshold <= 0.0 {
            warnings.push(format!("KO threshold {threshold:.2} is not positive"));
        }
        if ko_leverage > KO_LEVERAGE_WARN_LIMIT {
            warnings.push(format!(
                "implied KO leverage {ko_leverage:.1} exceeds {KO_LEVERAGE_WARN_LIMIT}"
            ));
            warn!(ko_leverage, threshold, "knock-out barrier implies extreme leverage");
        }

        Ok(KoThreshold {
            threshold,
            ko_leverage,
            warnings,
        })
    }

    /// Entry adjusted for round-trip commission (both legs) and spread.
    pub fn break_even_price(&self, entry: f64, commission_pct: f64, spread: f64) -> Result<f64> {
        check_price("entry", entry)?;
        if !commission_pct.is_finite() || commission_pct < 0.0 {
            return Err(EngineError::validation(format!(
                "commission fraction must be non-negative, got {commission_pct}"
            )));
        }
        if !spread.is_finite() || spread < 0.0 {
            return Err(EngineError::validation(format!(
                "spread must be non-negative, got {spread}"
            )));
        }
        Ok(entry + 2.0 * (entry * commission_pct) + spread)
    }

    /// Checks a concrete position against the account's risk budget and
    /// the hard leverage limit. Budget/limit breaches are errors; thin
    /// risk and elevated leverage are warnings.
    pub fn validate_trade_risk(
        &self,
        entry: f64,
        stop_loss: f64,
        position_size: f64,
        balance: f64,
    ) -> Result<RiskAssessment> {
        check_price("entry", entry)?;
        check_price("stop loss", stop_loss)?;
        if !position_size.is_finite() || position_size <= 0.0 {
            return Err(EngineError::validation(format!(
                "position size must be positive, got {position_size}"
            )));
        }
        if !balance.is_finite() || balance <= 0.0 {
            return Err(EngineError::validation(format!(
                "balance must be positive, got {balance}"
            )));
        }

        let risk_amount = (entry - stop_loss).abs() * position_size;
        let risk_percentage = risk_amount / balance * 100.0;
        let leverage = entry * position_size / balance;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if risk_amount > self.max_risk_amount {
            errors.push(format!(
                "risk amount {risk_amount:.2} exceeds budget {:.2}",
                self.max_risk_amount
            ));
        }
        if leverage > HARD_LEVERAGE_LIMIT {
            errors.push(format!(
                "leverage {leverage:.1} exceeds hard limit {HARD_LEVERAGE_LIMIT}"
            ));
        }
        if leverage > LEVERAGE_WARN_LIMIT && leverage <= HARD_LEVERAGE_LIMIT {
            warnings.push(format!("elevated leverage {leverage:.1}"));
        }
        if risk_percentage < MIN_RISK_PERCENTAGE_WARN {
            warnings.push(format!(
                "risk is only {risk_percentage:.3}% of balance; position may be too small"
            ));
        }

        Ok(RiskAssessment {
            risk_amount,
            risk_percentage,
            leverage,
            is_valid: errors.is_empty(),
            errors,
            warnings,
        })
    }

    /// Whether the trade has earned a break-even stop: profit in
    /// R-multiples must have reached `threshold_r`. The recommended new
    /// stop is the entry itself.
    pub fn should_move_to_break_even(
        &self,
        entry: f64,
        current_price: f64,
        stop_loss: f64,
        threshold_r: f64,
    ) -> Result<BreakEvenDecision> {
        check_price("entry", entry)?;
        check_price("current price", current_price)?;
        check_price("stop loss", stop_loss)?;
        if !threshold_r.is_finite() || threshold_r <= 0.0 {
            return Err(EngineError::validation(format!(
                "break-even threshold must be positive, got {threshold_r}"
            )));
        }
        if entry == stop_loss {
            return Err(EngineError::validation(
                "entry and stop loss must differ to measure R-multiples",
            ));
        }

        let one_r = (entry - stop_loss).abs();
        let signed_profit = match Direction::infer(entry, stop_loss) {
            Direction::Long => current_price - entry,
            Direction::Short => entry - current_price,
        };
        let current_r = signed_profit / one_r;

        Ok(BreakEvenDecision {
            current_r,
            should_move: current_r >= threshold_r,
            recommended_stop: entry,
        })
    }

    /// Composes the full plan: sizing from the per-trade budget, target,
    /// leverage check, KO barrier for KO products, break-even price and
    /// the risk assessment folded into validity/warnings. Deterministic,
    /// no I/O.
    pub fn full_trade_plan(
        &self,
        entry: f64,
        stop_loss: f64,
        direction: Direction,
        rr_ratio: f64,
        product_type: ProductType,
        commission_pct: f64,
    ) -> Result<TradePlan> {
        if Direction::infer(entry, stop_loss) != direction {
            return Err(EngineError::validation(format!(
                "stop loss {stop_loss} is on the wrong side of entry {entry} for {direction:?}"
            )));
        }

        let position_size = self.position_size(entry, stop_loss, self.max_risk_amount)?;
        let take_profit = self.take_profit(entry, stop_loss, rr_ratio)?;
        let leverage_check =
            self.leverage(entry * position_size, self.account_balance, product_type)?;
        let break_even_price = self.break_even_price(entry, commission_pct, 0.0)?;
        let assessment =
            self.validate_trade_risk(entry, stop_loss, position_size, self.account_balance)?;

        let mut warnings = assessment.warnings;
        warnings.extend(assessment.errors.iter().cloned());
        if !leverage_check.is_safe {
            warnings.push(format!(
                "leverage {:.1} exceeds {product_type:?} cap {:.0}",
                leverage_check.leverage, leverage_check.max_allowed
            ));
        }

        let ko = if product_type == ProductType::Ko {
            let ko = self.ko_threshold(entry, stop_loss, direction, DEFAULT_KO_BUFFER)?;
            warnings.extend(ko.warnings.iter().cloned());
            Some(ko)
        } else {
            None
        };

        let plan = TradePlan {
            direction,
            entry,
            stop_loss,
            take_profit,
            position_size,
            risk_amount: assessment.risk_amount,
            risk_percentage: assessment.risk_percentage,
            leverage: assessment.leverage,
            break_even_price,
            ko,
            is_valid: assessment.is_valid,
            warnings,
        };
        debug!(
            entry,
            stop_loss,
            position_size = plan.position_size,
            is_valid = plan.is_valid,
            "composed trade plan"
        );
        Ok(plan)
    }
}

fn check_price(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::validation(format!(
            "{name} must be a positive price, got {value}"
        )));
    }
    Ok(())
}
