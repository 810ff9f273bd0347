use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response carrying a single human-readable message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicMessageResponse {
    /// Message text
    pub message: String,
}

impl PublicMessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Standardized error response format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicErrorResponse {
    /// Machine-readable error kind (`bad_request`, `validation_error`,
    /// `conflict` or `internal_error`)
    pub error: String,

    /// Error message
    pub message: String,

    /// Optional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
