use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user as the DTO shared with the client
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `Option<UserDto>`: The user if present in the database
    /// - [`Error`]: An error if there is an issue with the database
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository.get(user_id).await?;

        Ok(user.map(|user| UserDto {
            id: user.id,
            email: user.email,
        }))
    }

    /// Get or create a user for a normalized email address
    ///
    /// Sign-in links are issued for any email, so the account is only created
    /// once the link is actually used.
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `entity::tankwiki_user::Model`: The user that was found or created
    /// - [`Error`]: An error if there is an issue with the database
    pub async fn get_or_create_by_email(
        &self,
        email: &str,
    ) -> Result<entity::tankwiki_user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if let Some(user) = user_repository.find_by_email(email).await? {
            return Ok(user);
        }

        let new_user = user_repository.create(email).await?;

        Ok(new_user)
    }
}

#[cfg(test)]
mod tests {
    mod get_user {
        use tankwiki_test_utils::prelude::*;

        use crate::server::service::user::UserService;

        /// Expect the stored email in the returned DTO
        #[tokio::test]
        async fn returns_user_dto() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_user(user_model.id).await;

            assert!(result.is_ok());

            let user_dto = result.unwrap().unwrap();
            assert_eq!(user_dto.email, "nemo@reef.example");

            Ok(())
        }

        /// Expect Ok(None) when the user does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_app_tables!()?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_user(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_or_create_by_email {
        use tankwiki_test_utils::prelude::*;

        use crate::server::service::user::UserService;

        /// Expect the existing user when the email is already registered
        #[tokio::test]
        async fn returns_existing_user() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_or_create_by_email("nemo@reef.example").await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().id, user_model.id);

            Ok(())
        }

        /// Expect a new user when the email is not registered
        #[tokio::test]
        async fn creates_new_user() -> Result<(), TestError> {
            let test = test_setup_with_app_tables!()?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_or_create_by_email("dory@reef.example").await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().email, "dory@reef.example");

            Ok(())
        }

        /// Expect error when required database tables haven't been created
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_service = UserService::new(&test.state.db);
            let result = user_service.get_or_create_by_email("nemo@reef.example").await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
