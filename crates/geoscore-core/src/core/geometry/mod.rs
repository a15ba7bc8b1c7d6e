//! # Geometry Module
//!
//! Hierarchical detector geometry: box solids, logical volumes, placements and
//! the [`scene::SceneBuilder`] that assembles them under a single world volume.
//!
//! ## Key Components
//!
//! - [`solid`] - Axis-aligned box primitive and bounding boxes
//! - [`transform`] - Rigid daughter-in-mother transforms
//! - [`volume`] - Logical volumes (solid + material + ordered daughters)
//! - [`placement`] - Placements and placement requests
//! - [`scene`] - The builder and the sealed, immutable [`scene::Scene`]
//! - [`dump`] - Deterministic text rendering used for inspection and tests
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = SceneBuilder::new(&registry);
//! let world = builder.create_world(Vector3::repeat(1.0 * METER), air)?;
//! let plate = builder.create_box("plateLV", Vector3::new(0.1 * METER, METER, METER), water)?;
//! builder.place(plate, world, PlacementRequest::at(Vector3::new(0.9 * METER, 0.0, 0.0)))?;
//! builder.seal()?;
//! let scene = builder.into_scene()?;
//! ```

pub mod dump;
pub mod error;
pub mod ids;
pub mod placement;
pub mod scene;
pub mod solid;
pub mod transform;
pub mod volume;
