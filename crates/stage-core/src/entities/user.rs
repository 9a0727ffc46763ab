//! User entity and its public Author projection

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Full user record as stored by the content store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    /// Device the account was created from
    pub device_id: String,
    pub joined: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Id, first_name: String, last_name: String, device_id: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            device_id,
            joined: Utc::now(),
        }
    }

    /// Full display name: "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Project this user to its public Author form
    pub fn to_author(&self) -> Author {
        Author {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Public projection of a user: the only user fields ever attached to a
/// reactable. Nothing beyond the two name fields may cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Create a new Author projection
    pub fn new(id: Id, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }
}
