use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tankwiki::server::{controller::auth::get_user, model::session::user::SessionUserId};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the signed-in user's information
async fn returns_signed_in_user() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 when no user ID is present in the session
async fn not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the account no longer exists
async fn not_found_for_deleted_account() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    SessionUserId::insert(&test.session, 999).await?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_user_id = SessionUserId::get(&test.session).await?;
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 when required database tables don't exist
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUserId::insert(&test.session, 1).await?;

    let result = get_user(State(test.state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
