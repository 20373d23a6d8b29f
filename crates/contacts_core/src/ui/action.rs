//! User actions and their element encoding.
//!
//! # Responsibility
//! - Name the two things a user can do: add a contact, remove one.
//! - Encode actions as element attributes so hosts can dispatch clicks
//!   through one delegated listener.
//!
//! # Invariants
//! - `Action::decode` accepts exactly what `Action::apply_to` writes.

use crate::dom::{Document, DomResult};
use crate::model::contact::ContactId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ACTION_ATTRIBUTE: &str = "data-action";
pub const CONTACT_ID_ATTRIBUTE: &str = "data-contact-id";

const ADD_ACTION: &str = "add";
const REMOVE_ACTION: &str = "remove";

/// A decoded user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the add form with the current input values.
    Add,
    /// Delete the contact with this id.
    Remove(ContactId),
}

/// Malformed action attributes on a clicked element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionDecodeError {
    UnknownAction(String),
    MissingContactId,
}

impl Display for ActionDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(name) => write!(f, "unknown action `{name}`"),
            Self::MissingContactId => write!(f, "remove action without contact id"),
        }
    }
}

impl Error for ActionDecodeError {}

impl Action {
    /// Stable action name written to `data-action`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => ADD_ACTION,
            Self::Remove(_) => REMOVE_ACTION,
        }
    }

    /// Marks `node` as the trigger for this action.
    pub fn apply_to<D: Document>(&self, document: &D, node: &D::Node) -> DomResult<()> {
        document.set_attribute(node, ACTION_ATTRIBUTE, self.name())?;
        if let Self::Remove(id) = self {
            document.set_attribute(node, CONTACT_ID_ATTRIBUTE, id.as_str())?;
        }
        Ok(())
    }

    /// Rebuilds an action from the attributes of a clicked element.
    pub fn decode(action: &str, contact_id: Option<&str>) -> Result<Self, ActionDecodeError> {
        match action {
            ADD_ACTION => Ok(Self::Add),
            REMOVE_ACTION => contact_id
                .map(|id| Self::Remove(ContactId::from(id)))
                .ok_or(ActionDecodeError::MissingContactId),
            other => Err(ActionDecodeError::UnknownAction(other.to_string())),
        }
    }
}
