// Ports define what the users core needs from storage, without implementing it.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory adapter for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::users::core::user::{NewUser, User, UserPatch};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("email already exists: {0}")]
    DuplicateEmail(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    async fn get(&self, id: i64) -> Result<Option<User>, RepositoryError>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, RepositoryError>;

    /// `false` when no user had that id.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
