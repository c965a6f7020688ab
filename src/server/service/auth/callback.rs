use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::sign_in_token::SignInTokenRepository,
    error::{auth::AuthError, Error},
    service::user::UserService,
};

/// Exchanges a sign-in token for a signed-in user.
///
/// Validates that the token exists, has not been used, and has not expired,
/// then consumes it so the link cannot be replayed. The account is created on
/// first sign-in.
///
/// # Returns
/// Returns a Result containing:
/// - `entity::tankwiki_user::Model`: The user the token signed in
/// - [`Error`]: An error if the token is invalid, consumed, or expired
pub async fn callback_service(
    db: &DatabaseConnection,
    token: &str,
) -> Result<entity::tankwiki_user::Model, Error> {
    let token_repository = SignInTokenRepository::new(db);

    let Some(sign_in_token) = token_repository.find_by_token(token).await? else {
        return Err(Error::AuthError(AuthError::SignInTokenInvalid));
    };

    if sign_in_token.consumed_at.is_some() {
        return Err(Error::AuthError(AuthError::SignInTokenConsumed));
    }

    if sign_in_token.expires_at < Utc::now().naive_utc() {
        return Err(Error::AuthError(AuthError::SignInTokenExpired));
    }

    let _ = token_repository.consume(sign_in_token.id).await?;

    let user_service = UserService::new(db);
    let user = user_service
        .get_or_create_by_email(&sign_in_token.email)
        .await?;

    tracing::info!(user_id = user.id, "User signed in");

    Ok(user)
}
