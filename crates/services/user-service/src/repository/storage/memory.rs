//! In-memory store with the same constraints as the `users` table.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sea_orm::DbErr;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{User, UserData, USERS_TABLE};

use super::UserStorage;

/// `users` table kept in process memory.
///
/// Ids are generated from a counter starting at 1 and are never reused,
/// like an auto-increment primary key.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    table: RwLock<Table>,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

impl Table {
    fn ensure_unique_email(&self, email: &str, except: Option<i32>) -> Result<(), DbErr> {
        let taken = self
            .rows
            .values()
            .any(|user| user.email == email && Some(user.id) != except);

        if taken {
            return Err(DbErr::Custom(format!(
                "UNIQUE constraint failed: {}.email",
                USERS_TABLE
            )));
        }
        Ok(())
    }
}

fn not_null(column: &str) -> DbErr {
    DbErr::Custom(format!(
        "NOT NULL constraint failed: {}.{}",
        USERS_TABLE, column
    ))
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStorage for InMemoryStorage {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, data: UserData) -> AppResult<User> {
        let mut table = self.table.write().await;

        let name = data.name.ok_or_else(|| not_null("name"))?;
        let email = data.email.ok_or_else(|| not_null("email"))?;
        let password = data.password.ok_or_else(|| not_null("password"))?;
        table.ensure_unique_email(&email, None)?;

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            name,
            email,
            password,
        };
        table.rows.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update_by_id(&self, id: i32, data: UserData) -> AppResult<Option<User>> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = data.email.as_deref() {
            table.ensure_unique_email(email, Some(id))?;
        }

        Ok(table.rows.get_mut(&id).map(|user| {
            user.merge(data);
            user.clone()
        }))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use common::AppError;

    use super::*;

    fn data(name: &str, email: &str) -> UserData {
        UserData::new().name(name).email(email).password("hashed")
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let storage = InMemoryStorage::new();
        let first = storage.insert(data("Ana", "ana@example.com")).await.unwrap();
        assert!(storage.delete_by_id(first.id).await.unwrap());

        let second = storage.insert(data("Ana", "ana@example.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_missing_column_is_store_error() {
        let storage = InMemoryStorage::new();
        let err = storage
            .insert(UserData::new().name("Ana").email("ana@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(DbErr::Custom(msg)) if msg.contains("users.password")));
        assert!(storage.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeping_own_email_is_allowed() {
        let storage = InMemoryStorage::new();
        let user = storage.insert(data("Ana", "ana@example.com")).await.unwrap();

        let updated = storage
            .update_by_id(user.id, UserData::new().name("Ana Costa").email("ana@example.com"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Ana Costa");
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_store_error() {
        let storage = InMemoryStorage::new();
        storage.insert(data("Ana", "ana@example.com")).await.unwrap();
        let bia = storage.insert(data("Bia", "bia@example.com")).await.unwrap();

        let err = storage
            .update_by_id(bia.id, UserData::new().email("ana@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        let stored = storage.find_by_id(bia.id).await.unwrap().unwrap();
        assert_eq!(stored.email, "bia@example.com");
    }
}
