//! # Scoring Module
//!
//! Stateless scoring vocabulary shared by the engine: the closed set of
//! [`quantity::QuantityKind`]s a sensitive region can record and the
//! [`accumulator::ScoreAccumulator`] that collects per-hit contributions.
//! Binding quantities to volumes is done by
//! [`crate::engine::sensitive::SensitiveDetectorManager`].

pub mod accumulator;
pub mod quantity;
