//! Startup configuration.
//!
//! # Responsibility
//! - Carry the host root id, title text and seed contacts into `mount`.
//!
//! # Invariants
//! - `AppConfig::default()` reproduces the shipped page: root `root`,
//!   title `Contacts`, three seeded contacts.

use crate::model::contact::{seed_contacts, Contact};

pub const DEFAULT_ROOT_ID: &str = "root";
pub const DEFAULT_TITLE: &str = "Contacts";

/// Options consumed once at mount time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Id of the host element the app is appended to.
    pub root_id: String,
    pub title: String,
    /// Initial store contents, in display order.
    pub seed: Vec<Contact>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            seed: seed_contacts(),
        }
    }
}

impl AppConfig {
    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_seed(mut self, seed: Vec<Contact>) -> Self {
        self.seed = seed;
        self
    }
}
