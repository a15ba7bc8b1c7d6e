//! Scene configuration for the `build` command.
//!
//! Values are layered: [`defaults`], then the TOML scene file ([`file`]), then
//! `-S key=value` overrides, then dedicated CLI flags. [`builder::build_config`]
//! merges the layers into a [`models::SceneConfig`] with every length in
//! millimetres.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::SceneConfig;
