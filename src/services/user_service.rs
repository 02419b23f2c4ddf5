//! User service - The mock API surface over the user store.
//!
//! Every call settles only after the configured latency. Mutations run
//! after the delay, so the store changes exactly when the call settles.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Latency, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Create a user; requires non-empty first and last name
    async fn create_user(&self, data: CreateUser) -> AppResult<()>;

    /// Shallow-merge the present fields of `changes` into a user
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<()>;

    /// Remove user by ID
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
    latency: Latency,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>, latency: Latency) -> Self {
        Self { repo, latency }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.latency.elapse().await;

        let users = self.repo.list().await?;
        tracing::debug!(count = users.len(), "Users listed");
        Ok(users)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.latency.elapse().await;

        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, data: CreateUser) -> AppResult<()> {
        self.latency.elapse().await;

        // No ID is generated for an incomplete payload
        if let Err(errors) = data.validate() {
            tracing::debug!("Create rejected: {}", errors);
            return Err(AppError::missing_information());
        }

        let user = self.repo.create(data).await?;
        tracing::info!(id = %user.id, "User created");
        Ok(())
    }

    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<()> {
        self.latency.elapse().await;

        self.repo.update(id, changes).await?;
        tracing::info!(%id, "User updated");
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.latency.elapse().await;

        self.repo.delete(id).await?;
        tracing::info!(%id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    fn create_test_user(id: Uuid) -> User {
        User {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            is_developer: false,
        }
    }

    fn service(repo: MockUserRepository) -> UserManager<MockUserRepository> {
        UserManager::new(Arc::new(repo), Latency::none())
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user_id))
            .returning(|id| Ok(Some(create_test_user(id))));

        let result = service(repo).get_user(user_id).await;

        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), AppError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                create_test_user(Uuid::new_v4()),
                create_test_user(Uuid::new_v4()),
            ])
        });

        let result = service(repo).list_users().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(CreateUser::new("Ann", "Lee", false)))
            .times(1)
            .returning(|data| Ok(User::new(Uuid::new_v4(), data)));

        let result = service(repo)
            .create_user(CreateUser::new("Ann", "Lee", false))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_validation_short_circuits() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = service(repo);
        let missing_first = service.create_user(CreateUser::new("", "Lee", false)).await;
        let missing_last = service.create_user(CreateUser::new("Ann", "", true)).await;

        assert_eq!(missing_first.unwrap_err(), AppError::missing_information());
        assert_eq!(missing_last.unwrap_err().code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_user_passes_partial_payload() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(eq(user_id), eq(UpdateUser::developer(true)))
            .times(1)
            .returning(|id, changes| {
                let mut user = create_test_user(id);
                user.apply(changes);
                Ok(user)
            });

        let result = service(repo)
            .update_user(user_id, UpdateUser::developer(true))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_propagates_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .returning(|_| Err(AppError::not_found("User not found")));

        let result = service(repo).delete_user(Uuid::new_v4()).await;

        assert!(result.unwrap_err().is_not_found());
    }
}
