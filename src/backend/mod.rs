//! Provider service client module for gRPC communication

mod client;
mod proto;
mod traits;

pub use client::{ProviderClient, DEFAULT_ADDRESS};
pub use traits::ProviderClientTrait;

#[cfg(test)]
pub use traits::MockProviderClientTrait;
