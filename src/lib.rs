//! Strongly typed, read-only configuration for a static documentation build.
//!
//! A [`Configuration`] is loaded once from a TOML file, never changes afterwards,
//! and is read by key with [`Configuration::get`]. Rendering, theming and asset
//! handling belong to the documentation renderer that consumes it.

pub mod configuration;
pub mod error;
pub mod export;
pub mod logging;
pub mod patterns;

pub use configuration::{Configuration, ConfigurationKey, ConfigurationValue};
pub use error::ConfigurationError;
