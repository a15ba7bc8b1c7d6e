//! # Core Module
//!
//! The stateless foundation of geoscore: units, materials, geometry and the
//! scoring vocabulary.
//!
//! ## Architecture
//!
//! - **Units** ([`units`]) - The internal system of units (mm, g, mole, MeV)
//! - **Materials** ([`materials`]) - Periodic table, elements, materials and the registry
//! - **Geometry** ([`geometry`]) - Box solids, logical volumes, placements and the scene builder
//! - **Scoring** ([`scoring`]) - Scoring quantities and accumulators
//!
//! Materials are the leaf layer: the scene builder resolves material ids
//! against an injected [`materials::registry::MaterialRegistry`], and the
//! engine's sensitive-detector pass resolves volume names against a sealed
//! [`geometry::scene::Scene`].

pub mod geometry;
pub mod materials;
pub mod scoring;
pub mod units;
