#[cfg(feature = "web")]
use crate::model::user::UserDto;

/// Retrieve the signed-in user from the API, if any
#[cfg(feature = "web")]
pub async fn get_user() -> Result<Option<UserDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get("/api/auth/user")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let user = response
                .json::<UserDto>()
                .await
                .map_err(|e| format!("Failed to parse user data: {}", e))?;
            Ok(Some(user))
        }
        404 => Ok(None),
        _ => Err(response_error(response).await),
    }
}
