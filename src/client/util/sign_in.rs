#[cfg(feature = "web")]
use crate::model::auth::LoginLinkDto;
#[cfg(feature = "web")]
use crate::model::user::UserDto;

/// Request a sign-in link for an email address
#[cfg(feature = "web")]
pub async fn request_sign_in(email: &str) -> Result<LoginLinkDto, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;
    use crate::model::auth::LoginRequestDto;

    let body = serde_json::to_string(&LoginRequestDto {
        email: email.to_string(),
    })
    .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let response = Request::post("/api/auth/login")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<LoginLinkDto>()
            .await
            .map_err(|e| format!("Failed to parse sign-in link: {}", e)),
        _ => Err(response_error(response).await),
    }
}

/// Exchange a sign-in token for a session
#[cfg(feature = "web")]
pub async fn complete_sign_in(token: &str) -> Result<UserDto, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get(&format!("/api/auth/callback?token={}", token))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<UserDto>()
            .await
            .map_err(|e| format!("Failed to parse user data: {}", e)),
        _ => Err(response_error(response).await),
    }
}
