use serde::{Deserialize, Serialize};

/// The body returned by API routes when a request fails
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Human-readable description of what went wrong
    pub error: String,
}
