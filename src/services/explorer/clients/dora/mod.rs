mod client;
mod responses;
mod transform;

pub use client::DoraClient;
