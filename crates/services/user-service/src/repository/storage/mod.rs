//! Store capability behind the user repository.
//!
//! The repository only needs five primitive operations from the store.
//! Production uses the relational store through SeaORM; tests and embedded
//! callers can use the in-memory store, which enforces the same `users`
//! table constraints.

mod memory;
mod relational;

use async_trait::async_trait;

use common::AppResult;
use domain::{User, UserData};

pub use self::memory::InMemoryStorage;
pub use self::relational::SeaOrmStorage;

/// Primitive operations over the `users` table.
///
/// Implementations do not validate the mapping; store constraints
/// (required columns, unique email) surface as `AppError::Database`.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Point lookup by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a row and return it with its generated id
    async fn insert(&self, data: UserData) -> AppResult<User>;

    /// Write the present fields of `data` to the row, if it exists
    async fn update_by_id(&self, id: i32, data: UserData) -> AppResult<Option<User>>;

    /// Delete the row, reporting whether one was removed
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    /// Every row in primary key order
    async fn list_all(&self) -> AppResult<Vec<User>>;
}
