use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use tankwiki::server::{
    controller::auth::{callback, CallbackParams},
    model::session::user::SessionUserId,
};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the user stored in session for a fresh token
async fn signs_in_with_valid_token() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let expires_at = (Utc::now() + Duration::minutes(60)).naive_utc();
    test.sign_in_token()
        .insert_sign_in_token("nemo@reef.example", "token-one", expires_at)
        .await?;

    let params = Query(CallbackParams {
        token: "token-one".to_string(),
    });
    let result = callback(State(test.state()), test.session.clone(), params).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user_id = SessionUserId::get(&test.session).await?;
    assert!(user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 400 with nothing in session for a token that was never issued
async fn rejects_unknown_token() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let params = Query(CallbackParams {
        token: "never-issued".to_string(),
    });
    let result = callback(State(test.state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let user_id = SessionUserId::get(&test.session).await?;
    assert!(user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 410 for a token past its expiry
async fn rejects_expired_token() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let expires_at = (Utc::now() - Duration::minutes(1)).naive_utc();
    test.sign_in_token()
        .insert_sign_in_token("nemo@reef.example", "token-one", expires_at)
        .await?;

    let params = Query(CallbackParams {
        token: "token-one".to_string(),
    });
    let result = callback(State(test.state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    Ok(())
}

#[tokio::test]
/// Expect 410 the second time the same link is followed
async fn rejects_replayed_token() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let expires_at = (Utc::now() + Duration::minutes(60)).naive_utc();
    test.sign_in_token()
        .insert_sign_in_token("nemo@reef.example", "token-one", expires_at)
        .await?;

    let params = Query(CallbackParams {
        token: "token-one".to_string(),
    });
    let _ = callback(State(test.state()), test.session.clone(), params).await;

    let params = Query(CallbackParams {
        token: "token-one".to_string(),
    });
    let result = callback(State(test.state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    Ok(())
}
