//! Utility modules for common functionality.
//!
//! - http: HTTP client construction for explorer transports
//! - logging: Logging setup and the shared error context
//! - parsing: Parsing utilities for CLI arguments and loosely typed JSON fields
//! - tests: Test utilities

pub mod http;
pub mod logging;
pub mod parsing;

pub use http::*;
pub use parsing::*;
