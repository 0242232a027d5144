//! Unit tests for Bollinger Bands and ATR

use approx::assert_relative_eq;
use signalguard::indicators::{atr, bollinger_bands, bollinger_bands_default};
use signalguard::EngineError;

#[test]
fn test_bollinger_band_ordering_invariant() {
    let series: Vec<f64> = (0..80)
        .map(|i| 100.0 + (i as f64 * 0.9).sin() * 8.0)
        .collect();
    let bands = bollinger_bands_default(&series).unwrap();
    for i in 0..series.len() {
        if let (Some(u), Some(m), Some(l)) = (bands.upper[i], bands.middle[i], bands.lower[i]) {
            assert!(u >= m && m >= l, "band ordering broken at {i}");
        }
    }
}

#[test]
fn test_bollinger_known_window() {
    // Window [1..5]: mean 3, sample variance 2.5, sd ~1.5811.
    let series = [1.0, 2.0, 3.0, 4.0, 5.0];
    let bands = bollinger_bands(&series, 5, 2.0).unwrap();
    let sd = 2.5_f64.sqrt();
    assert_relative_eq!(bands.middle[4].unwrap(), 3.0);
    assert_relative_eq!(bands.upper[4].unwrap(), 3.0 + 2.0 * sd, epsilon = 1e-9);
    assert_relative_eq!(bands.lower[4].unwrap(), 3.0 - 2.0 * sd, epsilon = 1e-9);
}

#[test]
fn test_bollinger_constant_series_collapses() {
    let series = vec![50.0; 30];
    let bands = bollinger_bands_default(&series).unwrap();
    let last = series.len() - 1;
    assert_relative_eq!(bands.upper[last].unwrap(), 50.0);
    assert_relative_eq!(bands.lower[last].unwrap(), 50.0);
}

#[test]
fn test_bollinger_rejects_degenerate_period() {
    assert!(matches!(
        bollinger_bands(&[1.0, 2.0], 1, 2.0),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_atr_known_values() {
    // TR: [1.0, max(1.0, 1.5, 0.5)] = [1.0, 1.5]; EMA(2) seed = 1.25.
    let high = [10.0, 11.0];
    let low = [9.0, 10.0];
    let close = [9.5, 10.5];
    let result = atr(&high, &low, &close, 2).unwrap();
    assert_eq!(result[0], None);
    assert_relative_eq!(result[1].unwrap(), 1.25);
}

#[test]
fn test_atr_flat_market_is_zero() {
    let flat = vec![100.0; 30];
    let result = atr(&flat, &flat, &flat, 14).unwrap();
    for value in result.iter().flatten() {
        assert_relative_eq!(*value, 0.0);
    }
}

#[test]
fn test_atr_rejects_mismatched_lengths() {
    let high = [10.0, 11.0, 12.0];
    let low = [9.0, 10.0];
    let close = [9.5, 10.5, 11.5];
    assert!(matches!(
        atr(&high, &low, &close, 2),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_atr_is_non_negative() {
    let high: Vec<f64> = (0..60).map(|i| 105.0 + (i as f64).sin() * 3.0).collect();
    let low: Vec<f64> = high.iter().map(|h| h - 2.0).collect();
    let close: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
    let result = atr(&high, &low, &close, 14).unwrap();
    for value in result.iter().flatten() {
        assert!(*value >= 0.0);
    }
}
