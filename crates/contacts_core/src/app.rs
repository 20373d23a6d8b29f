//! Application controller.
//!
//! # Responsibility
//! - Own the store, the document handle and the skeleton node handles.
//! - Turn user actions into store mutations followed by a full re-render.
//!
//! # Invariants
//! - After `mount` and after every `dispatch`, the contact container holds
//!   exactly one row per stored contact.
//! - An add with an empty name changes nothing, inputs included.
//! - Logs carry ids and counts only, never names or emails.

use crate::config::AppConfig;
use crate::dom::element::get_element_by_id_or_err;
use crate::dom::{Document, DomError};
use crate::model::contact::ContactId;
use crate::model::id::{IdGenerator, RandomIdGenerator};
use crate::store::contact_store::ContactStore;
use crate::ui::action::Action;
use crate::ui::render::render_contacts;
use crate::ui::view::{build_app, AppView};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

/// Controller-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Dom(DomError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dom(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dom(err) => Some(err),
        }
    }
}

impl From<DomError> for AppError {
    fn from(value: DomError) -> Self {
        Self::Dom(value)
    }
}

/// What a dispatched action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(ContactId),
    Removed(ContactId),
    /// Empty-name add, or remove of an unknown id.
    Ignored,
}

/// Mounted contact manager bound to one document.
pub struct ContactsApp<D: Document, G: IdGenerator = RandomIdGenerator> {
    document: D,
    view: AppView<D::Node>,
    store: ContactStore<G>,
}

impl<D: Document> ContactsApp<D> {
    /// Mounts the app with random contact ids.
    ///
    /// # Errors
    /// - `DomError::MissingElement` when `config.root_id` is not in the document.
    /// - Any host error raised while building the skeleton.
    pub fn mount(document: D, config: AppConfig) -> AppResult<Self> {
        Self::mount_with_generator(document, config, RandomIdGenerator::new())
    }
}

impl<D: Document, G: IdGenerator> ContactsApp<D, G> {
    /// Mounts the app using `ids` for newly added contacts.
    pub fn mount_with_generator(document: D, config: AppConfig, ids: G) -> AppResult<Self> {
        let root = get_element_by_id_or_err(&document, &config.root_id)?;
        let view = build_app(&document, &root, &config.title)?;
        let app = Self {
            document,
            view,
            store: ContactStore::with_contacts(config.seed, ids),
        };
        app.render()?;
        info!(
            "event=app_mounted module=controller status=ok root_id={} store_len={}",
            config.root_id,
            app.store.len()
        );
        Ok(app)
    }

    /// Applies one user action and re-renders when the store changed.
    pub fn dispatch(&mut self, action: Action) -> AppResult<Outcome> {
        match action {
            Action::Add => self.submit_add_form(),
            Action::Remove(id) => self.remove_contact(id),
        }
    }

    /// Rebuilds the contact list from the current store.
    pub fn render(&self) -> AppResult<usize> {
        let rows = render_contacts(&self.document, &self.view.contacts, self.store.contacts())?;
        debug!("event=contacts_rendered module=controller status=ok rows={rows}");
        Ok(rows)
    }

    /// Read-only view of the current contacts.
    pub fn store(&self) -> &ContactStore<G> {
        &self.store
    }

    /// The document the app is mounted in.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Handles to the skeleton nodes built at mount time.
    pub fn view(&self) -> &AppView<D::Node> {
        &self.view
    }

    /// The element whose children mirror the store.
    pub fn contacts_container(&self) -> &D::Node {
        &self.view.contacts
    }

    fn submit_add_form(&mut self) -> AppResult<Outcome> {
        let name = self.document.input_value(&self.view.name_input)?;
        let email = self.document.input_value(&self.view.email_input)?;
        let Some(id) = self.store.add(&name, &email) else {
            debug!("event=contact_add module=controller status=ignored reason=empty_name");
            return Ok(Outcome::Ignored);
        };

        self.render()?;
        self.document.set_input_value(&self.view.name_input, "")?;
        self.document.set_input_value(&self.view.email_input, "")?;
        info!(
            "event=contact_added module=controller status=ok id={id} has_email={} store_len={}",
            !email.is_empty(),
            self.store.len()
        );
        Ok(Outcome::Added(id))
    }

    fn remove_contact(&mut self, id: ContactId) -> AppResult<Outcome> {
        let removed = self.store.remove(&id);
        self.render()?;
        if removed.is_none() {
            debug!("event=contact_remove module=controller status=ignored id={id}");
            return Ok(Outcome::Ignored);
        }
        info!(
            "event=contact_removed module=controller status=ok id={id} store_len={}",
            self.store.len()
        );
        Ok(Outcome::Removed(id))
    }
}
