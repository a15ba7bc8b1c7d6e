//! # Materials Module
//!
//! Element and material definitions backed by a built-in periodic table.
//!
//! ## Key Components
//!
//! - [`element`] - Periodic-table data and the [`element::Element`] type
//! - [`material`] - Materials, their composition and physical state
//! - [`registry`] - The append-only [`registry::MaterialRegistry`]
//! - [`definition`] - Serde-deserializable definitions for TOML material files
//! - [`ids`] - Stable identifiers handed out by the registry
//!
//! ## Usage
//!
//! ```ignore
//! use geoscore::core::materials::registry::MaterialRegistry;
//! use geoscore::core::units::G_PER_CM3;
//!
//! let mut registry = MaterialRegistry::new();
//! let h = registry.find_or_build_element("H")?;
//! let o = registry.find_or_build_element("O")?;
//! let water = registry.define_compound("Water", 1.0 * G_PER_CM3, &[(h, 2), (o, 1)])?;
//! assert_eq!(registry.find_or_build_material("Water")?, water);
//! ```

pub mod definition;
pub mod element;
pub mod error;
pub mod ids;
pub mod material;
pub mod registry;
