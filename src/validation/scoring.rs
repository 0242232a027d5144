//! The five sub-score functions
//!
//! Pure tier logic, each returning a score in [0, 1]. Missing or zero
//! inputs degrade a score toward its floor rather than failing: a
//! low-confidence "no trade" is the correct response to sparse data.

use crate::models::candle::Candle;
use crate::models::context::EmaSnapshot;
use crate::models::indicators::{PivotLevels, Trend};

/// EMA alignment: 1.0 for a perfect monotonic stack in either direction,
/// otherwise the better direction's pairwise-aligned count out of three
/// (price vs 20, 20 vs 50, 50 vs 200). Undefined EMAs count as unaligned.
pub fn ema_alignment_score(price: f64, emas: &EmaSnapshot) -> f64 {
    let pairs = [
        (Some(price), emas.ema20),
        (emas.ema20, emas.ema50),
        (emas.ema50, emas.ema200),
    ];

    let bullish = pairs
        .iter()
        .filter(|(a, b)| matches!((a, b), (Some(x), Some(y)) if x > y))
        .count();
    let bearish = pairs
        .iter()
        .filter(|(a, b)| matches!((a, b), (Some(x), Some(y)) if x < y))
        .count();

    if bullish == 3 || bearish == 3 {
        return 1.0;
    }
    bullish.max(bearish) as f64 / 3.0
}

/// Pivot confluence: distance to the nearest of PP (weight 1.5), R1 (1.0)
/// and S1 (1.0), tiered by relative distance and scaled by the level
/// weight. Zero-valued levels are absent; no usable level scores 0.0.
pub fn pivot_confluence_score(price: f64, pivots: Option<&PivotLevels>) -> f64 {
    if price <= 0.0 || !price.is_finite() {
        return 0.0;
    }
    let pivots = match pivots {
        Some(p) => p,
        None => return 0.0,
    };

    let candidates = [(pivots.pp, 1.5), (pivots.r1, 1.0), (pivots.s1, 1.0)];
    let nearest = candidates
        .iter()
        .filter(|(level, _)| level.is_finite() && *level > 0.0)
        .map(|(level, weight)| ((price - level).abs() / price, *weight))
        .min_by(|a, b| a.0.total_cmp(&b.0));

    let (distance, weight) = match nearest {
        Some(n) => n,
        None => return 0.0,
    };

    let tier: f64 = if distance < 0.001 {
        1.0
    } else if distance < 0.005 {
        0.8
    } else if distance < 0.01 {
        0.6
    } else if distance < 0.02 {
        0.4
    } else {
        0.2
    };
    (tier * (weight / 1.5)).min(1.0)
}

/// Volume confirmation: current / average ratio tiers. Zero average means
/// no confirmation at all.
pub fn volume_confirmation_score(current: f64, average: f64) -> f64 {
    if average <= 0.0 || !average.is_finite() || !current.is_finite() {
        return 0.0;
    }
    let ratio = current / average;
    if ratio >= 2.0 {
        1.0
    } else if ratio >= 1.5 {
        0.9
    } else if ratio >= 1.2 {
        0.75
    } else if ratio >= 1.0 {
        0.6
    } else if ratio >= 0.8 {
        0.4
    } else {
        0.2
    }
}

/// Candle structure: reversal patterns first (hammer / inverted hammer,
/// then doji), then directional body-size tiers applied identically for
/// bullish and bearish bodies. A zero range is neutral.
pub fn candle_structure_score(candle: &Candle) -> f64 {
    let range = candle.high - candle.low;
    if range <= 0.0 || !range.is_finite() {
        return 0.5;
    }

    let body = (candle.close - candle.open).abs();
    let body_ratio = body / range;
    let upper_wick = (candle.high - candle.open.max(candle.close)) / range;
    let lower_wick = (candle.open.min(candle.close) - candle.low) / range;

    let hammer = lower_wick > 0.5 && body_ratio < 0.3 && upper_wick < 0.2;
    let inverted_hammer = upper_wick > 0.5 && body_ratio < 0.3 && lower_wick < 0.2;
    if hammer || inverted_hammer {
        return 0.95;
    }
    if body_ratio < 0.1 {
        // Doji
        return 0.7;
    }

    if body_ratio > 0.7 {
        0.9
    } else if body_ratio > 0.5 {
        0.75
    } else {
        0.6
    }
}

/// Context flow: 0.5 base, bonus for a directional trend and for
/// volatility in the tradable band, capped at 1.0.
pub fn context_flow_score(trend: Trend, volatility: f64) -> f64 {
    let mut score: f64 = 0.5;

    score += if trend.is_directional() { 0.3 } else { 0.1 };

    if volatility.is_finite() {
        if (0.10..=0.25).contains(&volatility) {
            score += 0.2;
        } else if (0.05..0.10).contains(&volatility)
            || (volatility > 0.25 && volatility <= 0.35)
        {
            score += 0.1;
        }
    }
    score.min(1.0)
}
