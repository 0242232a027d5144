//! Round-trip tests for the serializable output records
//!
//! The engine's outputs are handed to persistence/alerting collaborators
//! as plain records, so they must survive a JSON round trip unchanged.

use chrono::Utc;
use signalguard::indicators::IndicatorEngine;
use signalguard::models::{
    Candle, Direction, EmaSnapshot, IndicatorSet, ProductType, SignalContext, StrategyId,
    TradePlan, ValidationResult, VolumeSnapshot,
};
use signalguard::risk::RiskCalculator;
use signalguard::validation::ValidationEngine;

fn create_test_candles(count: usize) -> Vec<Candle> {
    let mut candles = Vec::new();
    for i in 0..count {
        let base = 100.0 + (i as f64 * 0.4);
        candles.push(Candle::new(
            base,
            base + 0.5,
            base - 0.3,
            base + 0.2,
            1_000.0 + (i as f64 * 5.0),
            Utc::now(),
        ));
    }
    candles
}

#[test]
fn test_indicator_set_round_trips_through_json() {
    let candles = create_test_candles(220);
    let set = IndicatorEngine::compute(&candles).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    let restored: IndicatorSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[test]
fn test_validation_result_round_trips_through_json() {
    let engine = ValidationEngine::with_default_weights();
    let candles = create_test_candles(220);
    let set = IndicatorEngine::compute(&candles).unwrap();
    let last = candles.last().unwrap();

    let context = SignalContext {
        price: last.close,
        emas: EmaSnapshot {
            ema20: IndicatorSet::latest(&set.ema20),
            ema50: IndicatorSet::latest(&set.ema50),
            ema200: IndicatorSet::latest(&set.ema200),
        },
        pivots: Some(set.pivots),
        volume: VolumeSnapshot {
            current: last.volume,
            average: 1_000.0,
        },
        last_candle: last.clone(),
        trend: set.trend,
        volatility: 0.12,
        strategy: StrategyId::Breakout,
    };

    let result = engine.validate(&context);
    let json = serde_json::to_string(&result).unwrap();
    let restored: ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, restored);
}

#[test]
fn test_trade_plan_round_trips_through_json() {
    let calculator = RiskCalculator::new(10_000.0, 0.01).unwrap();
    for product in [ProductType::Cfd, ProductType::Ko, ProductType::Futures] {
        let plan = calculator
            .full_trade_plan(19_500.0, 19_450.0, Direction::Long, 2.0, product, 0.001)
            .unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let restored: TradePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, restored);
    }
}

#[test]
fn test_enums_use_wire_friendly_names() {
    assert_eq!(serde_json::to_string(&Direction::Long).unwrap(), "\"long\"");
    assert_eq!(serde_json::to_string(&ProductType::Ko).unwrap(), "\"KO\"");
    assert_eq!(
        serde_json::to_string(&StrategyId::MeanReversion).unwrap(),
        "\"mean_reversion\""
    );
}
