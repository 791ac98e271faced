//! User service - Handles user-related business logic.
//!
//! Adds the creation rule and the name fallback on top of the repository;
//! everything else is delegated.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{User, UserData, NAME_AND_EMAIL_REQUIRED, USER_NOT_FOUND_NAME};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Name of the user, or [`USER_NOT_FOUND_NAME`] when there is no such
    /// user or the name is empty
    async fn get_user_name(&self, id: i32) -> AppResult<String>;

    /// Create a user; `name` and `email` must be present and non-empty
    async fn create_user(&self, data: UserData) -> AppResult<User>;

    /// Update an existing user; `None` if there is no such user
    async fn update_user(&self, id: i32, data: UserData) -> AppResult<Option<User>>;

    /// Delete a user; `false` if there is no such user
    async fn delete_user(&self, id: i32) -> AppResult<bool>;

    /// List all users
    async fn get_all_users(&self) -> AppResult<Vec<User>>;
}

/// Fields a new user cannot go without.
#[derive(Validate)]
struct RequiredFields {
    #[validate(required, length(min = 1))]
    name: Option<String>,
    #[validate(required, length(min = 1))]
    email: Option<String>,
}

impl From<&UserData> for RequiredFields {
    fn from(data: &UserData) -> Self {
        Self {
            name: data.name.clone(),
            email: data.email.clone(),
        }
    }
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user_name(&self, id: i32) -> AppResult<String> {
        let name = self
            .repo
            .find(id)
            .await?
            .map(|user| user.name)
            .filter(|name| !name.is_empty());

        Ok(name.unwrap_or_else(|| USER_NOT_FOUND_NAME.to_string()))
    }

    async fn create_user(&self, data: UserData) -> AppResult<User> {
        if let Err(errors) = RequiredFields::from(&data).validate() {
            warn!(?errors, "Rejected user creation");
            return Err(AppError::validation(NAME_AND_EMAIL_REQUIRED));
        }

        self.repo.create(data).await
    }

    async fn update_user(&self, id: i32, data: UserData) -> AppResult<Option<User>> {
        // The repository looks the user up again before writing
        if self.repo.find(id).await?.is_none() {
            return Ok(None);
        }

        self.repo.update(id, data).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<bool> {
        self.repo.delete(id).await
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.repo.all().await
    }
}
