#[cfg(feature = "web")]
use crate::model::livestock::LivestockSummaryDto;

/// Retrieve the livestock summary rows used for dashboard headcounts
#[cfg(feature = "web")]
pub async fn get_livestock_summary() -> Result<Vec<LivestockSummaryDto>, String> {
    use reqwasm::http::Request;

    use crate::client::util::response_error::response_error;

    let response = Request::get("/api/livestock")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<LivestockSummaryDto>>()
            .await
            .map_err(|e| format!("Failed to parse livestock summary: {}", e)),
        404 => Ok(Vec::new()),
        _ => Err(response_error(response).await),
    }
}
