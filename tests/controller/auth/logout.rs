use axum::{http::StatusCode, response::IntoResponse};
use tankwiki::server::{controller::auth::logout, model::session::user::SessionUserId};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 temporary redirect after logout with a user ID in session
async fn redirects_and_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUserId::insert(&test.session, 1).await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let maybe_user_id = SessionUserId::get(&test.session).await?;
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
///
/// Clearing an empty session answers 500 from the session layer, so the
/// endpoint only clears when a user ID is actually present.
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
