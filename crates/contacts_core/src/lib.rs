//! Core logic for the contacts page.
//! This crate owns the store, the view layer and the controller; hosts only
//! provide a `Document` implementation and forward clicks as `Action`s.

pub mod app;
pub mod config;
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;

pub use app::{AppError, AppResult, ContactsApp, Outcome};
pub use config::AppConfig;
pub use dom::element::{create_element, get_element_by_id_or_err, Child, Props};
pub use dom::memory::{MemoryDocument, NodeId};
pub use dom::{Document, DomError, DomResult, Tag};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::contact::{seed_contacts, Contact, ContactId};
pub use model::id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use store::contact_store::ContactStore;
pub use ui::action::{Action, ActionDecodeError, ACTION_ATTRIBUTE, CONTACT_ID_ATTRIBUTE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
