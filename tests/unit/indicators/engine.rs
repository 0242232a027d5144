//! Unit tests for the full indicator set computation

use chrono::Utc;
use signalguard::indicators::IndicatorEngine;
use signalguard::models::{Candle, IndicatorSet, Trend};
use signalguard::EngineError;

fn create_test_candles(count: usize, base_price: f64, step: f64) -> Vec<Candle> {
    let mut candles = Vec::new();
    for i in 0..count {
        let base = base_price + (i as f64 * step);
        candles.push(Candle::new(
            base,
            base + 0.3,
            base - 0.2,
            base + 0.1,
            1000.0 + (i as f64 * 10.0),
            Utc::now(),
        ));
    }
    candles
}

#[test]
fn test_compute_full_set_on_uptrend() {
    let candles = create_test_candles(250, 100.0, 0.5);
    let set = IndicatorEngine::compute(&candles).unwrap();

    assert_eq!(set.ema20.len(), 250);
    assert_eq!(set.ema200.len(), 250);
    assert_eq!(set.rsi.len(), 250);
    assert_eq!(set.crossovers.len(), 250);

    // Steadily rising closes stack the EMAs bullishly.
    assert_eq!(set.trend, Trend::Bullish);
    assert!(set.alignment.perfect_bullish);
    assert!(set.alignment.golden_cross);

    for value in set.rsi.iter().flatten() {
        assert!((0.0..=100.0).contains(value));
    }
    for i in 0..250 {
        if let (Some(u), Some(m), Some(l)) = (
            set.bollinger.upper[i],
            set.bollinger.middle[i],
            set.bollinger.lower[i],
        ) {
            assert!(u >= m && m >= l);
        }
    }
}

#[test]
fn test_compute_pivots_come_from_last_bar() {
    let candles = create_test_candles(250, 100.0, 0.5);
    let set = IndicatorEngine::compute(&candles).unwrap();
    let last = candles.last().unwrap();
    let expected_pp = (last.high + last.low + last.close) / 3.0;
    assert!((set.pivots.pp - expected_pp).abs() < 1e-9);
}

#[test]
fn test_compute_latest_helper() {
    let candles = create_test_candles(250, 100.0, 0.5);
    let set = IndicatorEngine::compute(&candles).unwrap();
    assert!(IndicatorSet::latest(&set.ema200).is_some());
    let undefined: Vec<Option<f64>> = vec![None, None];
    assert!(IndicatorSet::latest(&undefined).is_none());
}

#[test]
fn test_compute_rejects_short_window() {
    let candles = create_test_candles(150, 100.0, 0.5);
    assert!(matches!(
        IndicatorEngine::compute(&candles),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_compute_rejects_malformed_candle() {
    let mut candles = create_test_candles(250, 100.0, 0.5);
    candles[100].low = candles[100].high + 1.0;
    assert!(matches!(
        IndicatorEngine::compute(&candles),
        Err(EngineError::InvalidInput(_))
    ));
}
