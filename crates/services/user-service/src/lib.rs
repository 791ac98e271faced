//! User Service Library
//!
//! Data access and business rules for user records: a repository over the
//! `users` store and a thin service on top of it.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::AppResult;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Connect to the configured database and wire the service on top of it.
pub async fn connect(config: &UserServiceConfig) -> AppResult<UserManager> {
    let db = Database::connect(&config.database).await?;
    let user_repo = Arc::new(UserStore::with_database(db.get_connection()));

    Ok(UserManager::new(user_repo))
}

/// Service over an empty in-memory store.
pub fn in_memory() -> UserManager {
    UserManager::new(Arc::new(UserStore::in_memory()))
}
