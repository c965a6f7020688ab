//! Typed wrapper for the signed-in user's ID in the session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key the signed-in user's ID is stored under.
pub const SESSION_USER_ID_KEY: &str = "tankwiki:user:id";

/// The signed-in user's ID as stored in the session.
///
/// Stored as a string so the session payload stays stable across ID type
/// changes; parsed back to `i32` on read.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    mod insert {
        use tankwiki_test_utils::prelude::*;

        use crate::server::model::session::user::SessionUserId;

        /// Expect success when inserting a valid user ID into the session
        #[tokio::test]
        async fn inserts_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_id = 1;
            let result = SessionUserId::insert(&test.session, user_id).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod get {
        use tankwiki_test_utils::prelude::*;

        use crate::server::model::session::user::{SessionUserId, SESSION_USER_ID_KEY};

        /// Expect Some when a user ID is present in the session
        #[tokio::test]
        async fn returns_stored_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user_id = 1;
            SessionUserId::insert(&test.session, user_id).await.unwrap();

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap(), Some(user_id));

            Ok(())
        }

        /// Expect None when no user ID is present in the session
        #[tokio::test]
        async fn returns_none_for_empty_session() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }

        /// Expect a parse error when the stored value is not an i32
        #[tokio::test]
        async fn fails_for_non_numeric_value() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            test.session
                .insert(SESSION_USER_ID_KEY, SessionUserId("invalid_id".to_string()))
                .await?;

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
