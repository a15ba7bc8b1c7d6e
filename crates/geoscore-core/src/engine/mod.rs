//! # Engine Module
//!
//! Stateful machinery that runs on top of the [`crate::core`] data model.
//!
//! - [`sensitive`] - The [`sensitive::SensitiveDetectorManager`], which binds
//!   scoring quantities to named leaf volumes of a sealed scene and owns their
//!   accumulators
//! - [`progress`] - Callback-based progress reporting for long-running workflows
//! - [`error`] - [`error::ScoringError`] and the aggregated
//!   [`error::ConstructionError`]

pub mod error;
pub mod progress;
pub mod sensitive;
