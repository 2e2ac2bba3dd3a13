//! Wire types and client for `provider.v1.ProviderService`
//!
//! Mirrors:
//!
//! ```proto
//! service ProviderService {
//!   rpc UpdateProvider(UpdateProviderRequest) returns (UpdateProviderResponse);
//! }
//! message UpdateProviderRequest { string id = 1; string alias = 2; }
//! message ErrorDetail { string detail = 1; }
//! message UpdateProviderResponse { repeated ErrorDetail errors = 1; }
//! ```

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateProviderRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub alias: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ErrorDetail {
    #[prost(string, tag = "1")]
    pub detail: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateProviderResponse {
    #[prost(message, repeated, tag = "1")]
    pub errors: Vec<ErrorDetail>,
}

const UPDATE_PROVIDER_PATH: &str = "/provider.v1.ProviderService/UpdateProvider";

/// Unary client for the provider service
#[derive(Debug, Clone)]
pub struct ProviderServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl ProviderServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn update_provider(
        &mut self,
        request: impl tonic::IntoRequest<UpdateProviderRequest>,
    ) -> Result<tonic::Response<UpdateProviderResponse>, tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static(UPDATE_PROVIDER_PATH);
        self.inner.unary(request.into_request(), path, codec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_request_encoding_uses_field_tags() {
        let request = UpdateProviderRequest {
            id: "p1".to_string(),
            alias: "prod".to_string(),
        };
        // tag 1 (len-delimited) "p1", tag 2 (len-delimited) "prod"
        assert_eq!(
            request.encode_to_vec(),
            vec![0x0a, 2, b'p', b'1', 0x12, 4, b'p', b'r', b'o', b'd']
        );
    }

    #[test]
    fn test_response_decoding() {
        let response = UpdateProviderResponse {
            errors: vec![ErrorDetail {
                detail: "alias already exists".to_string(),
            }],
        };
        let decoded = UpdateProviderResponse::decode(response.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.errors[0].detail, "alias already exists");
    }

    #[test]
    fn test_empty_response_has_no_errors() {
        let decoded = UpdateProviderResponse::decode(&[][..]).unwrap();
        assert!(decoded.errors.is_empty());
    }
}
