//! Mock implementations for testing purposes.
//!
//! This module contains mock implementations used by the integration tests:
//! - Explorer transports (mockall)
//! - Explorer and node servers, and explorer response bodies (mockito)

#[allow(unused_imports)]
pub use models::*;
#[allow(unused_imports)]
pub use transports::*;
