//! Unit tests for the five sub-score functions

use approx::assert_relative_eq;
use chrono::Utc;
use signalguard::models::{Candle, EmaSnapshot, PivotLevels, Trend};
use signalguard::validation::scoring::{
    candle_structure_score, context_flow_score, ema_alignment_score, pivot_confluence_score,
    volume_confirmation_score,
};

fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(open, high, low, close, 1000.0, Utc::now())
}

fn pivots(pp: f64, r1: f64, s1: f64) -> PivotLevels {
    PivotLevels {
        pp,
        r1,
        r2: 0.0,
        r3: 0.0,
        s1,
        s2: 0.0,
        s3: 0.0,
    }
}

#[test]
fn test_ema_alignment_perfect_either_direction() {
    let bullish = EmaSnapshot {
        ema20: Some(104.0),
        ema50: Some(102.0),
        ema200: Some(100.0),
    };
    assert_relative_eq!(ema_alignment_score(105.0, &bullish), 1.0);

    let bearish = EmaSnapshot {
        ema20: Some(96.0),
        ema50: Some(98.0),
        ema200: Some(100.0),
    };
    assert_relative_eq!(ema_alignment_score(95.0, &bearish), 1.0);
}

#[test]
fn test_ema_alignment_partial_takes_better_direction() {
    // Bullish relations: price > ema20 only. Bearish: ema20 < ema50 < ema200.
    let emas = EmaSnapshot {
        ema20: Some(100.0),
        ema50: Some(101.0),
        ema200: Some(102.0),
    };
    assert_relative_eq!(ema_alignment_score(105.0, &emas), 2.0 / 3.0);
}

#[test]
fn test_ema_alignment_degrades_on_missing_emas() {
    let emas = EmaSnapshot::default();
    assert_relative_eq!(ema_alignment_score(105.0, &emas), 0.0);
}

#[test]
fn test_pivot_confluence_tiers() {
    let levels = pivots(100.0, 110.0, 90.0);
    // Price on the pivot: full score.
    assert_relative_eq!(pivot_confluence_score(100.0, Some(&levels)), 1.0);
    // ~0.2% away: 0.8 tier at full pivot weight.
    assert_relative_eq!(pivot_confluence_score(100.2, Some(&levels)), 0.8);
    // Far from everything, pivot point nearest: floor tier at full weight.
    let far = pivots(120.0, 100.0, 90.0);
    assert_relative_eq!(pivot_confluence_score(150.0, Some(&far)), 0.2);
}

#[test]
fn test_pivot_confluence_weight_scaling_for_r1() {
    // Price sits on R1; R1 carries weight 1.0 of 1.5.
    let levels = pivots(90.0, 100.0, 80.0);
    assert_relative_eq!(pivot_confluence_score(100.0, Some(&levels)), 1.0 / 1.5);
}

#[test]
fn test_pivot_confluence_absent_levels_score_zero() {
    assert_relative_eq!(pivot_confluence_score(100.0, None), 0.0);
    let zeroed = pivots(0.0, 0.0, 0.0);
    assert_relative_eq!(pivot_confluence_score(100.0, Some(&zeroed)), 0.0);
}

#[test]
fn test_volume_confirmation_tiers() {
    assert_relative_eq!(volume_confirmation_score(2000.0, 1000.0), 1.0);
    assert_relative_eq!(volume_confirmation_score(1500.0, 1000.0), 0.9);
    assert_relative_eq!(volume_confirmation_score(1200.0, 1000.0), 0.75);
    assert_relative_eq!(volume_confirmation_score(1000.0, 1000.0), 0.6);
    assert_relative_eq!(volume_confirmation_score(800.0, 1000.0), 0.4);
    assert_relative_eq!(volume_confirmation_score(100.0, 1000.0), 0.2);
}

#[test]
fn test_volume_confirmation_zero_average() {
    assert_relative_eq!(volume_confirmation_score(1000.0, 0.0), 0.0);
}

#[test]
fn test_candle_structure_strong_body() {
    // Body covers ~86% of range, no meaningful wicks.
    assert_relative_eq!(candle_structure_score(&candle(100.0, 110.0, 99.5, 109.0)), 0.9);
    // Bearish body scores identically.
    assert_relative_eq!(candle_structure_score(&candle(109.0, 110.0, 99.5, 100.0)), 0.9);
}

#[test]
fn test_candle_structure_hammer_beats_body_tiers() {
    // Long lower wick, small body near the top.
    let hammer = candle(100.0, 100.6, 98.0, 100.5);
    assert_relative_eq!(candle_structure_score(&hammer), 0.95);
    // Mirrored: inverted hammer.
    let inverted = candle(100.5, 103.0, 100.4, 100.6);
    assert_relative_eq!(candle_structure_score(&inverted), 0.95);
}

#[test]
fn test_candle_structure_doji() {
    let doji = candle(100.0, 101.0, 99.0, 100.0);
    assert_relative_eq!(candle_structure_score(&doji), 0.7);
}

#[test]
fn test_candle_structure_zero_range_is_neutral() {
    let flat = candle(100.0, 100.0, 100.0, 100.0);
    assert_relative_eq!(candle_structure_score(&flat), 0.5);
}

#[test]
fn test_context_flow_bands() {
    assert_relative_eq!(context_flow_score(Trend::Bullish, 0.15), 1.0);
    assert_relative_eq!(context_flow_score(Trend::Bearish, 0.15), 1.0);
    assert_relative_eq!(context_flow_score(Trend::Neutral, 0.15), 0.8);
    assert_relative_eq!(context_flow_score(Trend::Bullish, 0.07), 0.9);
    assert_relative_eq!(context_flow_score(Trend::Bullish, 0.30), 0.9);
    assert_relative_eq!(context_flow_score(Trend::Bullish, 0.50), 0.8);
    assert_relative_eq!(context_flow_score(Trend::Neutral, 0.50), 0.6);
}
