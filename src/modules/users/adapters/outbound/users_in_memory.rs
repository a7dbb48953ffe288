// In memory implementation of the UserRepository port.
//
// Purpose
// - Run the users vertical without a database.
//
// Responsibilities
// - Hand out increasing ids that are never reused after a delete.
// - Reject a second user with the same email, like a unique index would.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::modules::users::core::ports::{RepositoryError, UserRepository};
use crate::modules::users::core::user::{NewUser, User, UserPatch};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

impl Table {
    fn email_taken_by_other(&self, email: &str, id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|user| user.email == email && Some(user.id) != id)
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("User repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        if table.email_taken_by_other(&new_user.email, None) {
            return Err(RepositoryError::DuplicateEmail(new_user.email));
        }
        table.last_id += 1;
        let user = User {
            id: table.last_id,
            email: new_user.email,
            full_name: new_user.full_name,
            created_at: Utc::now(),
        };
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = &patch.email {
            if table.email_taken_by_other(email, Some(id)) {
                return Err(RepositoryError::DuplicateEmail(email.clone()));
            }
        }
        let Some(user) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        user.apply(patch);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod users_in_memory_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            full_name: None,
        }
    }

    #[fixture]
    fn repository() -> InMemoryUsers {
        InMemoryUsers::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_and_get_a_user(repository: InMemoryUsers) {
        let created = repository.create(new_user("a@example.com")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(repository.get(1).await.unwrap(), Some(created.clone()));
        assert_eq!(
            repository.get_by_email("a@example.com").await.unwrap(),
            Some(created)
        );
        assert_eq!(repository.get_by_email("b@example.com").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_newest_first(repository: InMemoryUsers) {
        repository.create(new_user("a@example.com")).await.unwrap();
        repository.create(new_user("b@example.com")).await.unwrap();
        repository.create(new_user("c@example.com")).await.unwrap();
        let ids: Vec<i64> = repository
            .list()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_reuse_ids_after_delete(repository: InMemoryUsers) {
        repository.create(new_user("a@example.com")).await.unwrap();
        assert!(repository.delete(1).await.unwrap());
        let next = repository.create(new_user("b@example.com")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_duplicate_email(repository: InMemoryUsers) {
        repository.create(new_user("a@example.com")).await.unwrap();
        let result = repository.create(new_user("a@example.com")).await;
        assert!(matches!(result, Err(RepositoryError::DuplicateEmail(email)) if email == "a@example.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_update_only_existing_users(repository: InMemoryUsers) {
        repository.create(new_user("a@example.com")).await.unwrap();
        let patch = UserPatch {
            email: Some("new@example.com".to_string()),
            full_name: Some("New Name".to_string()),
        };
        let updated = repository.update(1, patch.clone()).await.unwrap().unwrap();
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.full_name.as_deref(), Some("New Name"));
        assert_eq!(repository.update(42, patch).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_allow_keeping_the_own_email_on_update(repository: InMemoryUsers) {
        repository.create(new_user("a@example.com")).await.unwrap();
        let patch = UserPatch {
            email: Some("a@example.com".to_string()),
            full_name: None,
        };
        assert!(repository.update(1, patch).await.unwrap().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_taking_another_users_email(repository: InMemoryUsers) {
        repository.create(new_user("a@example.com")).await.unwrap();
        repository.create(new_user("b@example.com")).await.unwrap();
        let patch = UserPatch {
            email: Some("a@example.com".to_string()),
            full_name: None,
        };
        assert!(matches!(
            repository.update(2, patch).await,
            Err(RepositoryError::DuplicateEmail(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_deleting_a_missing_user(repository: InMemoryUsers) {
        assert!(!repository.delete(7).await.unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(mut repository: InMemoryUsers) {
        repository.toggle_offline();
        let result = repository.list().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("User repository offline")
        );
    }
}
