//! # geoscore Core Library
//!
//! Detector-construction toolkit: a material registry, a hierarchical box
//! geometry builder and sensitive-region scoring, in the shape expected by a
//! Monte Carlo particle-transport engine.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models: the system of units,
//!   elements and materials with their [`core::materials::registry::MaterialRegistry`],
//!   box solids, logical volumes and placements assembled by
//!   [`core::geometry::scene::SceneBuilder`], and the scoring vocabulary.
//!
//! - **[`engine`]: The Logic Core.** Stateful services layered on a sealed scene,
//!   chiefly the [`engine::sensitive::SensitiveDetectorManager`] that binds
//!   scorers to named volumes, plus progress reporting and error aggregation.
//!
//! - **[`workflows`]: The Public API.** The two-phase construction driver
//!   ([`workflows::construct::run`]) and ready-made detectors such as
//!   [`workflows::tutorial::PlateDosimetry`].

pub mod core;
pub mod engine;
pub mod workflows;
