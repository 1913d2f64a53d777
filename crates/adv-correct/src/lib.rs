#![deny(unsafe_code)]

//! Catalog-driven auto-correction of ADV sample fields.
//!
//! Each coded field has a [`CorrectionStrategy`] that tries deterministic
//! rewrites of legacy codes first and, for pathogens, falls back to a fuzzy
//! search over the catalog. The [`StrategyRegistry`] holds the strategies in
//! a fixed order and the [`CorrectionEngine`] applies them to batches.

mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod registry;
pub mod strategies;
pub mod strategy;

pub use config::CorrectionConfig;
pub use engine::{BatchReport, CorrectionEngine, SampleCorrections, StrategyFailure};
pub use error::{CorrectionError, Result};
pub use registry::StrategyRegistry;
pub use strategy::CorrectionStrategy;
