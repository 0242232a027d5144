//! Weighted confidence scoring over a caller-assembled signal context.

pub mod engine;
pub mod rules;
pub mod scoring;
pub mod weights;

pub use engine::ValidationEngine;
pub use rules::{ConstantRules, RulesProvider};
pub use weights::ValidationWeights;
