//! gRPC client for the provider service

use super::proto::{self, ProviderServiceClient};
use super::traits::ProviderClientTrait;
use crate::state::{MutationErrorDetail, MutationResult, UpdateProviderPayload};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tonic::transport::Endpoint;

/// Default server address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50051";

/// Client for communicating with the provider service
#[derive(Debug, Clone)]
pub struct ProviderClient {
    /// The gRPC client
    client: ProviderServiceClient,
    /// The server address
    address: String,
}

impl ProviderClient {
    /// Create a client. The connection is established on first use.
    pub fn new(address: &str) -> Result<Self> {
        let endpoint = Endpoint::from_shared(address.to_string())
            .map_err(|e| anyhow!("Invalid server address {}: {}", address, e))?;
        let channel = endpoint.connect_lazy();

        Ok(Self {
            client: ProviderServiceClient::new(channel),
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl From<&UpdateProviderPayload> for proto::UpdateProviderRequest {
    fn from(payload: &UpdateProviderPayload) -> Self {
        Self {
            id: payload.id.clone(),
            alias: payload.alias.clone(),
        }
    }
}

impl From<proto::UpdateProviderResponse> for MutationResult {
    fn from(response: proto::UpdateProviderResponse) -> Self {
        Self {
            errors: response
                .errors
                .into_iter()
                .map(|e| MutationErrorDetail { detail: e.detail })
                .collect(),
        }
    }
}

#[async_trait]
impl ProviderClientTrait for ProviderClient {
    async fn update_provider(&self, payload: &UpdateProviderPayload) -> Result<MutationResult> {
        let mut client = self.client.clone();

        let request = tonic::Request::new(proto::UpdateProviderRequest::from(payload));

        let response = client
            .update_provider(request)
            .await
            .map_err(|e| anyhow!("Failed to update provider: {}", e))?;

        Ok(response.into_inner().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_from_payload() {
        let payload = UpdateProviderPayload {
            id: "p1".to_string(),
            alias: String::new(),
        };
        let request = proto::UpdateProviderRequest::from(&payload);
        assert_eq!(request.id, "p1");
        assert_eq!(request.alias, "");
    }

    #[test]
    fn test_result_from_response_keeps_order() {
        let response = proto::UpdateProviderResponse {
            errors: vec![
                proto::ErrorDetail {
                    detail: "X".to_string(),
                },
                proto::ErrorDetail {
                    detail: "Y".to_string(),
                },
            ],
        };
        let result = MutationResult::from(response);
        assert_eq!(result, MutationResult::failure(["X", "Y"]));
    }

    #[test]
    fn test_invalid_address_rejected() {
        assert!(ProviderClient::new("not a uri").is_err());
    }

    #[tokio::test]
    async fn test_new_does_not_connect() {
        let client = ProviderClient::new(DEFAULT_ADDRESS).unwrap();
        assert_eq!(client.address(), DEFAULT_ADDRESS);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not a gRPC server
        let client = ProviderClient::new("http://127.0.0.1:9").unwrap();
        let payload = UpdateProviderPayload {
            id: "p1".to_string(),
            alias: "prod".to_string(),
        };
        let err = client.update_provider(&payload).await.unwrap_err();
        assert!(err.to_string().contains("Failed to update provider"));
    }
}
