//! # Workflows Module
//!
//! High-level entry points that turn a detector description into a complete,
//! sealed detector.
//!
//! ## Architecture
//!
//! - **Construction Workflow** ([`construct`]) - The [`construct::DetectorConstruction`]
//!   trait and [`construct::run`], which defines materials, builds and seals the
//!   geometry, then attaches sensitive detectors, reporting each phase.
//! - **Tutorial Detector** ([`tutorial`]) - A water dose plate behind a liquid
//!   argon absorber in an air world.

pub mod construct;
pub mod tutorial;
