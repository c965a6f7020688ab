use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    model::{auth::LoginLinkDto, validate::validate_email},
    server::{
        data::sign_in_token::SignInTokenRepository,
        error::{validation::ValidationError, Error},
    },
};

/// Length of the token embedded in a sign-in link.
pub const TOKEN_LENGTH: usize = 48;

/// How long a sign-in link stays valid.
pub const TOKEN_TTL_MINUTES: i64 = 60;

/// Issues a single-use sign-in link for an email address.
///
/// The email is normalized before the token is stored so the same address
/// always resolves to the same account. Until mail delivery lands the
/// callback URL is returned to the caller directly.
///
/// # Returns
/// Returns a Result containing:
/// - [`LoginLinkDto`]: The callback URL carrying the sign-in token
/// - [`Error`]: An error if the email is invalid or the database fails
pub async fn login_service(
    db: &DatabaseConnection,
    app_url: &str,
    email: &str,
) -> Result<LoginLinkDto, Error> {
    let email = validate_email(email).map_err(ValidationError::Invalid)?;

    let token: String = rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect();
    let expires_at = (Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES)).naive_utc();

    let token_repository = SignInTokenRepository::new(db);
    token_repository.create(&email, &token, expires_at).await?;

    let callback = format!(
        "{}/auth/callback?token={}",
        app_url.trim_end_matches('/'),
        token
    );

    tracing::info!(%email, "Issued sign-in link");

    Ok(LoginLinkDto { callback })
}
