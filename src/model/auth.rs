use serde::{Deserialize, Serialize};

/// Body for requesting a sign-in link
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginRequestDto {
    pub email: String,
}

/// Sign-in link issued for an email address
///
/// Until outbound mail delivery lands the callback URL is returned directly
/// so the link can be surfaced in the UI and in server logs.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginLinkDto {
    /// Absolute URL the user follows to complete sign-in
    pub callback: String,
}
