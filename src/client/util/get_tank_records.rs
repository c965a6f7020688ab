//! Fetchers for the per-tank record collections on the tank detail page
//!
//! A 404 from any of these means the tank itself is gone; the detail page
//! resolves that through the tank fetch, so here it renders as empty.

#[cfg(feature = "web")]
use crate::model::{
    equipment::EquipmentDto, livestock::LivestockDto, maintenance::MaintenanceLogDto,
    test_result::TestResultDto,
};

/// Retrieve the equipment installed in a tank
#[cfg(feature = "web")]
pub async fn get_tank_equipment(tank_id: i32) -> Result<Vec<EquipmentDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get(&format!("/api/tanks/{}/equipment", tank_id))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<EquipmentDto>>()
            .await
            .map_err(|e| format!("Failed to parse equipment data: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}

/// Retrieve the livestock kept in a tank
#[cfg(feature = "web")]
pub async fn get_tank_livestock(tank_id: i32) -> Result<Vec<LivestockDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get(&format!("/api/tanks/{}/livestock", tank_id))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<LivestockDto>>()
            .await
            .map_err(|e| format!("Failed to parse livestock data: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}

/// Retrieve a tank's most recent maintenance log entries
#[cfg(feature = "web")]
pub async fn get_tank_maintenance(tank_id: i32) -> Result<Vec<MaintenanceLogDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get(&format!("/api/tanks/{}/maintenance", tank_id))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<MaintenanceLogDto>>()
            .await
            .map_err(|e| format!("Failed to parse maintenance data: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}

/// Retrieve a tank's most recent water test results
#[cfg(feature = "web")]
pub async fn get_tank_test_results(tank_id: i32) -> Result<Vec<TestResultDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get(&format!("/api/tanks/{}/test-results", tank_id))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<TestResultDto>>()
            .await
            .map_err(|e| format!("Failed to parse test result data: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}
