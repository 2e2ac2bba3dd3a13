//! Trait abstraction for the provider client to enable mocking in tests

use crate::state::{MutationResult, UpdateProviderPayload};
use anyhow::Result;
use async_trait::async_trait;

/// The mutation collaborator that persists a rename.
///
/// `Ok` carries the mutation result, including reported errors; `Err` is a
/// transport fault where no result was obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderClientTrait: Send + Sync {
    /// Update a provider's alias
    async fn update_provider(&self, payload: &UpdateProviderPayload) -> Result<MutationResult>;
}
