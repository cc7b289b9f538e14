//! Explorer client implementations.
//!
//! One client per backend family. Both share the pure helpers in `common` and
//! implement the same [`Provider`](crate::services::explorer::Provider) contract.

pub(crate) mod common;
mod dora;
mod neoscan;

pub use dora::DoraClient;
pub use neoscan::NeoscanClient;
