//! Provider records and the rename mutation payload/result

use serde::{Deserialize, Serialize};

/// Form-encoded key for the provider id
pub const PAYLOAD_ID_KEY: &str = "id";
/// Form-encoded key for the new alias
pub const PAYLOAD_ALIAS_KEY: &str = "alias";

/// Provider information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub alias: Option<String>,
}

impl Provider {
    pub fn new(id: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            id: id.into(),
            alias: alias.filter(|a| !a.is_empty()),
        }
    }

    /// Alias if one is set, otherwise the id
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }
}

/// Payload sent to the update mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProviderPayload {
    pub id: String,
    pub alias: String,
}

impl UpdateProviderPayload {
    /// Key-value pairs in form-submission order
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            (PAYLOAD_ID_KEY, self.id.as_str()),
            (PAYLOAD_ALIAS_KEY, self.alias.as_str()),
        ]
    }
}

/// A single error entry returned by the mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationErrorDetail {
    pub detail: String,
}

/// Result of the update mutation; errors are data, not transport failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    #[serde(default)]
    pub errors: Vec<MutationErrorDetail>,
}

#[cfg(test)]
impl MutationResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure<I, S>(details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: details
                .into_iter()
                .map(|d| MutationErrorDetail { detail: d.into() })
                .collect(),
        }
    }
}

impl MutationResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Detail of the first reported error
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|e| e.detail.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_empty_alias_is_none() {
        let provider = Provider::new("p1", Some(String::new()));
        assert!(provider.alias.is_none());
        assert_eq!(provider.display_name(), "p1");
    }

    #[test]
    fn test_provider_display_name_prefers_alias() {
        let provider = Provider::new("p1", Some("prod".to_string()));
        assert_eq!(provider.display_name(), "prod");
    }

    #[test]
    fn test_form_fields_order() {
        let payload = UpdateProviderPayload {
            id: "p1".to_string(),
            alias: "prod".to_string(),
        };
        assert_eq!(payload.form_fields(), [("id", "p1"), ("alias", "prod")]);
    }

    #[test]
    fn test_mutation_result_first_error() {
        let result = MutationResult::failure(["X", "Y"]);
        assert!(!result.is_success());
        assert_eq!(result.first_error(), Some("X"));
    }

    #[test]
    fn test_mutation_result_missing_errors_is_success() {
        let parsed: MutationResult = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.first_error(), None);
    }

    #[test]
    fn test_mutation_result_deserialize_errors() {
        let json = r#"{"errors": [{"detail": "alias already exists", "code": 409}]}"#;
        let parsed: MutationResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_error(), Some("alias already exists"));
    }
}
