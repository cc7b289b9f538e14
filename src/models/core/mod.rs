//! Core domain models.
//!
//! - Networks: registry entries resolving a network to its explorer base URLs

mod network;

pub use network::{ExplorerType, ExplorerUrls, Network};
