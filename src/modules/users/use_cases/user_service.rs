use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::modules::users::core::ports::{RepositoryError, UserRepository};
use crate::modules::users::core::user::{NewUser, User, UserPatch};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("email already registered")]
    EmailTaken,

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateEmail(_) => ApplicationError::EmailTaken,
            other => ApplicationError::Repository(other),
        }
    }
}

pub struct UserService<TRepository>
where
    TRepository: UserRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UserService<TRepository>
where
    TRepository: UserRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<User, ApplicationError> {
        if self
            .repository
            .get_by_email(&new_user.email)
            .await?
            .is_some()
        {
            return Err(ApplicationError::EmailTaken);
        }
        let user = self.repository.create(new_user).await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApplicationError> {
        Ok(self.repository.list().await?)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, ApplicationError> {
        Ok(self.repository.get(id).await?)
    }

    pub async fn update_user(
        &self,
        id: i64,
        patch: UserPatch,
    ) -> Result<Option<User>, ApplicationError> {
        Ok(self.repository.update(id, patch).await?)
    }

    pub async fn delete_user(&self, id: i64) -> Result<bool, ApplicationError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(user_id = id, "user deleted");
        }
        Ok(deleted)
    }
}
