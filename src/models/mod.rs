//! Domain models and data structures for the explorer client.
//!
//! - `config`: Configuration loading and validation
//! - `core`: Network registry entries
//! - `explorer`: Canonical records produced by every explorer backend

mod config;
mod core;
mod explorer;

pub use config::{ConfigError, ConfigLoader};

pub use core::{ExplorerType, ExplorerUrls, Network};

pub use explorer::*;
