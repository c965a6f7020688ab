#[cfg(feature = "web")]
use crate::model::aquarium::AquariumDto;

/// Retrieve the user's aquariums from the API
#[cfg(feature = "web")]
pub async fn get_aquariums() -> Result<Vec<AquariumDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get("/api/aquariums")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<AquariumDto>>()
            .await
            .map_err(|e| format!("Failed to parse aquarium data: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}
