//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::{DEVELOPER_TEXT, NON_DEVELOPER_TEXT};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub is_developer: bool,
}

impl User {
    /// Create a user record from a creation payload
    pub fn new(id: Uuid, data: CreateUser) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            is_developer: data.is_developer,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Human readable developer status
    pub fn developer_text(&self) -> &'static str {
        if self.is_developer {
            DEVELOPER_TEXT
        } else {
            NON_DEVELOPER_TEXT
        }
    }

    /// Shallow-merge the fields present in `changes`; absent fields are kept.
    pub fn apply(&mut self, changes: UpdateUser) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(is_developer) = changes.is_developer {
            self.is_developer = is_developer;
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.full_name(), self.developer_text())
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    pub is_developer: bool,
}

impl CreateUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        is_developer: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_developer,
        }
    }
}

/// User update data transfer object
///
/// Every field is optional; only present fields overwrite the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_developer: Option<bool>,
}

impl UpdateUser {
    /// Payload that only touches the developer flag
    pub fn developer(is_developer: bool) -> Self {
        Self {
            is_developer: Some(is_developer),
            ..Self::default()
        }
    }
}
