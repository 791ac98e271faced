//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use common::AppResult;
use domain::{User, UserData};

use super::storage::{InMemoryStorage, SeaOrmStorage, UserStorage};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// A missing record is never an error: lookups yield `None` and deletes
/// yield `false`. Store failures are passed through untouched.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a new user from any field mapping (no validation here)
    async fn create(&self, data: UserData) -> AppResult<User>;

    /// Merge `data` into an existing user; `None` if there is no such user
    async fn update(&self, id: i32, data: UserData) -> AppResult<Option<User>>;

    /// Delete user by ID; `false` if there is no such user
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// List all users in primary key order
    async fn all(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over a store.
///
/// Holds no state of its own: every call goes to the store.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn UserStorage>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    /// Repository over the relational `users` table.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmStorage::new(db)))
    }

    /// Repository over an empty in-memory table.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStorage::new()))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: i32) -> AppResult<Option<User>> {
        let user = self.storage.find_by_id(id).await?;
        debug!(found = user.is_some(), "User lookup");
        Ok(user)
    }

    #[tracing::instrument(skip(self, data))]
    async fn create(&self, data: UserData) -> AppResult<User> {
        let user = self.storage.insert(data).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    #[tracing::instrument(skip(self, data))]
    async fn update(&self, id: i32, data: UserData) -> AppResult<Option<User>> {
        if self.storage.find_by_id(id).await?.is_none() {
            debug!("Update skipped, user not found");
            return Ok(None);
        }

        let user = self.storage.update_by_id(id, data).await?;
        info!("User updated");
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i32) -> AppResult<bool> {
        if self.storage.find_by_id(id).await?.is_none() {
            debug!("Delete skipped, user not found");
            return Ok(false);
        }

        let deleted = self.storage.delete_by_id(id).await?;
        info!(deleted, "User deleted");
        Ok(deleted)
    }

    async fn all(&self) -> AppResult<Vec<User>> {
        self.storage.list_all().await
    }
}
