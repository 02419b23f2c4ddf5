//! In-memory user repository.
//!
//! The store owns the only copy of the user mapping. Each mutation is a
//! single step under the write lock, so two mutations never interleave.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::MSG_USERS_NOT_FOUND;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in creation order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Store a new user under a freshly generated ID
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Shallow-merge `changes` into an existing user
    async fn update(&self, id: Uuid, changes: UpdateUser) -> AppResult<User>;

    /// Remove user by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// The two users every seeded store starts with.
pub fn seed_users() -> Vec<CreateUser> {
    vec![
        CreateUser::new("Robin", "Wieruch", true),
        CreateUser::new("Dave", "Davddis", false),
    ]
}

#[derive(Debug)]
struct Row {
    seq: u64,
    user: User,
}

#[derive(Debug, Default)]
struct Table {
    next_seq: u64,
    rows: HashMap<Uuid, Row>,
}

impl Table {
    fn insert(&mut self, data: CreateUser) -> User {
        let mut id = Uuid::new_v4();
        while self.rows.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let user = User::new(id, data);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(
            id,
            Row {
                seq,
                user: user.clone(),
            },
        );
        user
    }
}

/// Concrete in-memory implementation of UserRepository.
///
/// The mapping lives until [`UserStore::close`]; afterwards every operation
/// fails with "Users not found".
#[derive(Debug)]
pub struct UserStore {
    table: RwLock<Option<Table>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Some(Table::default())),
        }
    }

    /// Create a store holding the given users, each under a fresh ID
    pub fn with_users(users: impl IntoIterator<Item = CreateUser>) -> Self {
        let mut table = Table::default();
        for data in users {
            table.insert(data);
        }
        Self {
            table: RwLock::new(Some(table)),
        }
    }

    /// Create a store holding the demo users
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Tear the mapping down. Idempotent.
    pub async fn close(&self) {
        if let Some(table) = self.table.write().await.take() {
            tracing::info!(users = table.rows.len(), "User store closed");
        }
    }

    pub async fn is_open(&self) -> bool {
        self.table.read().await.is_some()
    }
}

fn missing_collection() -> AppError {
    AppError::not_found(MSG_USERS_NOT_FOUND)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let guard = self.table.read().await;
        let table = guard.as_ref().ok_or_else(missing_collection)?;

        let mut rows: Vec<&Row> = table.rows.values().collect();
        rows.sort_by_key(|row| row.seq);
        Ok(rows.into_iter().map(|row| row.user.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let guard = self.table.read().await;
        let table = guard.as_ref().ok_or_else(missing_collection)?;

        Ok(table.rows.get(&id).map(|row| row.user.clone()))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let mut guard = self.table.write().await;
        let table = guard.as_mut().ok_or_else(missing_collection)?;

        let user = table.insert(data);
        tracing::debug!(id = %user.id, "User stored");
        Ok(user)
    }

    async fn update(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        let mut guard = self.table.write().await;
        let table = guard.as_mut().ok_or_else(missing_collection)?;

        let row = table.rows.get_mut(&id).ok_or_not_found()?;
        row.user.apply(changes);
        Ok(row.user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut guard = self.table.write().await;
        let table = guard.as_mut().ok_or_else(missing_collection)?;

        table.rows.remove(&id).ok_or_not_found()?;
        tracing::debug!(%id, "User removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_seeded_store_lists_in_creation_order() {
        let store = UserStore::seeded();
        let users = store.list().await.unwrap();

        let names: Vec<String> = users.iter().map(User::full_name).collect();
        assert_eq!(names, vec!["Robin Wieruch", "Dave Davddis"]);
        assert!(users[0].is_developer);
        assert!(!users[1].is_developer);
    }

    #[tokio::test]
    async fn test_create_generates_unused_id() {
        let store = UserStore::seeded();
        let before: HashSet<Uuid> = store.list().await.unwrap().iter().map(|u| u.id).collect();

        let created = store
            .create(CreateUser::new("Ann", "Lee", false))
            .await
            .unwrap();

        assert!(!before.contains(&created.id));
        assert_eq!(store.list().await.unwrap().len(), 3);
        assert_eq!(store.list().await.unwrap().last(), Some(&created));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let store = UserStore::new();
        let err = store
            .update(Uuid::new_v4(), UpdateUser::developer(true))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = UserStore::seeded();
        let users = store.list().await.unwrap();

        store.delete(users[0].id).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![users[1].clone()]);
        assert!(store.delete(users[0].id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_closed_store_reports_missing_collection() {
        let store = UserStore::seeded();
        let id = store.list().await.unwrap()[0].id;

        store.close().await;
        store.close().await;

        assert!(!store.is_open().await);
        let expected = AppError::not_found("Users not found");
        assert_eq!(store.list().await.unwrap_err(), expected);
        assert_eq!(store.find_by_id(id).await.unwrap_err(), expected);
        assert_eq!(
            store.create(CreateUser::new("Ann", "Lee", false)).await.unwrap_err(),
            expected
        );
    }
}
