#[cfg(feature = "web")]
use crate::model::aquarium::{AquariumDto, CreateAquariumDto};

/// Create an aquarium through the API
#[cfg(feature = "web")]
pub async fn create_aquarium(dto: &CreateAquariumDto) -> Result<AquariumDto, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let body =
        serde_json::to_string(dto).map_err(|e| format!("Failed to serialize request: {}", e))?;

    let response = Request::post("/api/aquariums")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        201 => response
            .json::<AquariumDto>()
            .await
            .map_err(|e| format!("Failed to parse aquarium data: {}", e)),
        _ => Err(response_error(response).await),
    }
}
