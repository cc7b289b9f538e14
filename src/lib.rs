//! Explorer client for NEO wallets.
//!
//! This library normalizes two blockchain explorer REST backends (Neoscan and
//! Dora) into one canonical model and selects healthy RPC nodes. It includes:
//!
//! - Network registry loading through JSON files
//! - RPC node filtering and a first-responder endpoint race
//! - Response transformers with exact fixed-point amounts
//! - A single provider interface over both backends
//!
//! # Module Structure
//!
//! - `models`: Canonical records and network configuration
//! - `services`: Transports, node selection and providers
//! - `utils`: Logging, HTTP client construction and helpers

pub mod models;
pub mod services;
pub mod utils;
