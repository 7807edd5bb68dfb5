//! This module contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load and read it.
//!
//! Your starting point should probably be [`Configuration::load_from_default_path`]
//! or [`Configuration::load_from_path`], followed by [`Configuration::get`].
//!
//! # Internals
//! The configuration is split into unresolved and resolved structures.
//!
//! [`Configuration`] loads the configuration file and deserializes it into the
//! [`UnresolvedConfiguration`] structure, which mirrors the TOML file one table per field.
//! It will then call its `resolve` method, which recursively turns it
//! (and its tables) into resolved versions: the author list is normalized,
//! glob patterns are compiled and the log directory is placed under the project root.
//!
//! The resolved [`Configuration`] never changes afterwards. Values the renderer
//! consumes (theme names, extension names, paths) are kept literally and are not checked here.

#![allow(rustdoc::private_intra_doc_links)]

mod key;
mod structure;
mod traits;
mod utilities;

pub use key::{ConfigurationKey, ConfigurationValue};
pub use structure::*;
pub use utilities::DEFAULT_CONFIGURATION_FILE_CANDIDATES;
