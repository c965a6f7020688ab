use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use tankwiki::{model::auth::LoginRequestDto, server::controller::auth::login};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with a sign-in token stored for the address
async fn issues_sign_in_link() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let dto = LoginRequestDto {
        email: "nemo@reef.example".to_string(),
    };
    let result = login(State(test.state()), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let tokens = entity::prelude::SignInToken::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].email, "nemo@reef.example");

    Ok(())
}

#[tokio::test]
/// Expect the stored token row to carry the normalized address
async fn normalizes_email_before_storing() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let dto = LoginRequestDto {
        email: "  NEMO@Reef.example  ".to_string(),
    };
    let result = login(State(test.state()), Json(dto)).await;

    assert!(result.is_ok());

    let tokens = entity::prelude::SignInToken::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].email, "nemo@reef.example");

    Ok(())
}

#[tokio::test]
/// Expect 400 for an address that fails validation
async fn rejects_invalid_email() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let dto = LoginRequestDto {
        email: "not-an-email".to_string(),
    };
    let result = login(State(test.state()), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let tokens = entity::prelude::SignInToken::find()
        .all(&test.state.db)
        .await?;
    assert!(tokens.is_empty());

    Ok(())
}
