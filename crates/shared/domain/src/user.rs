//! User domain entity and the field mapping used to create or update it.

use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier generated by the store on creation
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Opaque hashed credential, never serialized back to callers
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl User {
    /// Merge the present fields of `data` into this record.
    ///
    /// Fields absent from `data` are left untouched.
    pub fn merge(&mut self, data: UserData) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(password) = data.password {
            self.password = password;
        }
    }
}

/// Field -> value mapping for user writes.
///
/// `None` means the field is not part of the mapping. Unknown keys are
/// ignored when deserializing.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl std::fmt::Debug for UserData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl UserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// True when the mapping carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}
