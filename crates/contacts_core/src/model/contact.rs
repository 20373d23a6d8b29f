//! Contact domain model.
//!
//! # Responsibility
//! - Define the single record kept by the contact store.
//! - Provide the seeded contacts shown on first load.
//!
//! # Invariants
//! - `id` is unique within one store and never reused.
//! - `name` is non-empty for every stored contact. The store enforces this
//!   at its add boundary; the type itself does not.
//! - `email` is `None` rather than an empty string.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Short opaque contact identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One entry of the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Generated at add time; stable for the contact's lifetime.
    pub id: ContactId,
    /// Display name; never empty once stored.
    pub name: String,
    /// Serialized as `null` when absent.
    pub email: Option<String>,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
        }
    }
}

/// Contacts present when the page first loads.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("p9n51g", "Alice", None),
        Contact::new("8mopn7", "Bob", Some("bob@gmail.com".to_string())),
        Contact::new("u7oo0d", "Paul", Some("paul@gmail.com".to_string())),
    ]
}
