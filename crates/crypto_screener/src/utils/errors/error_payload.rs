use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned by the API when a request cannot be served.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    pub message: String,
    /// HTTP status code, repeated in the body for clients that drop headers
    pub code: u16,
    /// Stable identifier such as `BAD_REQUEST` or `TEMPLATE_ERROR`
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
