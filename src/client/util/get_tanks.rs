#[cfg(feature = "web")]
use crate::model::tank::TankDto;

/// Retrieve every tank the user owns from the API
#[cfg(feature = "web")]
pub async fn get_tanks() -> Result<Vec<TankDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get("/api/tanks")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<TankDto>>()
            .await
            .map_err(|e| format!("Failed to parse tank data: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}

/// Retrieve one tank by id, None when it does not exist or is not the user's
#[cfg(feature = "web")]
pub async fn get_tank(tank_id: i32) -> Result<Option<TankDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get(&format!("/api/tanks/{}", tank_id))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let tank = response
                .json::<TankDto>()
                .await
                .map_err(|e| format!("Failed to parse tank data: {}", e))?;
            Ok(Some(tank))
        }
        404 => Ok(None),
        _ => Err(response_error(response).await),
    }
}
