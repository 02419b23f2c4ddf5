//! User list view model.
//!
//! Holds a transient copy of the user collection and drives the user
//! service from input events. Every successful mutation is followed by a
//! full re-fetch; the cached list is replaced, never patched. Failures are
//! logged and leave the current state in place.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppError;
use crate::services::{ServiceContainer, UserService};

/// Lifecycle of the cached collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Unloaded,
    Loading,
    Loaded(Vec<User>),
}

/// Contents of the "new user" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
}

pub struct UserList {
    service: Arc<dyn UserService>,
    state: ViewState,
    form: UserForm,
}

impl UserList {
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self {
            service,
            state: ViewState::Unloaded,
            form: UserForm::default(),
        }
    }

    pub fn from_container(services: &dyn ServiceContainer) -> Self {
        Self::new(services.users())
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ViewState::Loaded(_))
    }

    /// Cached users; empty until loaded
    pub fn users(&self) -> &[User] {
        match &self.state {
            ViewState::Loaded(users) => users,
            _ => &[],
        }
    }

    /// User at a 1-based position of the rendered list
    pub fn user_at(&self, position: usize) -> Option<&User> {
        position
            .checked_sub(1)
            .and_then(|index| self.users().get(index))
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    /// Initial fetch. Only acts on an unloaded view.
    pub async fn mount(&mut self) {
        if self.state != ViewState::Unloaded {
            return;
        }

        self.state = ViewState::Loading;
        if !self.refetch().await {
            self.state = ViewState::Unloaded;
        }
    }

    /// Re-fetch the whole collection without a mutation
    pub async fn reload(&mut self) {
        self.refetch().await;
    }

    pub fn change_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
    }

    pub fn change_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
    }

    /// Create a non-developer user from the form, then re-fetch
    pub async fn submit(&mut self) {
        let data = CreateUser::new(
            self.form.first_name.clone(),
            self.form.last_name.clone(),
            false,
        );

        match self.service.create_user(data).await {
            Ok(()) => {
                self.refetch().await;
            }
            Err(e) => log_failure("create", &e),
        }
    }

    /// Flip the developer flag of a cached user, then re-fetch
    pub async fn toggle_developer(&mut self, id: Uuid) {
        let Some(user) = self.users().iter().find(|user| user.id == id) else {
            tracing::warn!(%id, "Toggle ignored: user is not in the list");
            return;
        };
        let changes = UpdateUser::developer(!user.is_developer);

        match self.service.update_user(id, changes).await {
            Ok(()) => {
                self.refetch().await;
            }
            Err(e) => log_failure("update", &e),
        }
    }

    /// Delete a user, then re-fetch
    pub async fn remove(&mut self, id: Uuid) {
        match self.service.delete_user(id).await {
            Ok(()) => {
                self.refetch().await;
            }
            Err(e) => log_failure("delete", &e),
        }
    }

    /// One line per user, e.g. "Robin Wieruch is a developer"
    pub fn render(&self) -> Vec<String> {
        self.users().iter().map(ToString::to_string).collect()
    }

    async fn refetch(&mut self) -> bool {
        match self.service.list_users().await {
            Ok(users) => {
                self.state = ViewState::Loaded(users);
                true
            }
            Err(e) => {
                log_failure("list", &e);
                false
            }
        }
    }
}

fn log_failure(action: &str, error: &AppError) {
    tracing::error!(action, code = error.code(), "{}", error);
}
