//! User registration draft.

use crate::storefront::error::StorefrontError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Password,
}

impl FromStr for UserField {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(UserField::Name),
            "password" => Ok(UserField::Password),
            other => Err(StorefrontError::Config(format!("unknown form field '{other}'"))),
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub password: String,
}

// Keep the password out of logs
impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

impl UserDraft {
    pub fn set_field(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Password => self.password = value,
        }
    }

    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.name.trim().is_empty() || self.password.is_empty() {
            return Err(StorefrontError::Validation(
                "Name and password are required!".to_string(),
            ));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
