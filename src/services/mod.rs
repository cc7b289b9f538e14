//! Services implementing the explorer access logic.
//!
//! - `explorer`: Transports, node selection, response normalization and providers

pub mod explorer;
