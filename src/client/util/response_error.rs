/// Build an error message from a failed API response
///
/// Prefers the structured error body, falling back to the raw response text.
#[cfg(feature = "web")]
pub async fn response_error(response: reqwasm::http::Response) -> String {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        )
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        )
    }
}
