//! Repository layer for data access.

pub mod entities;
pub mod storage;
mod user_repository;

pub use storage::{InMemoryStorage, SeaOrmStorage, UserStorage};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
