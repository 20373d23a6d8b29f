//! Contact list renderer.
//!
//! # Responsibility
//! - Replace the contact container's children with one row per contact.
//!
//! # Invariants
//! - Every call is a full teardown and rebuild; no diffing.
//! - Row count always equals the number of contacts passed in.
//! - The email paragraph exists only when the contact has an email.

use crate::dom::element::{create_element, Child, Props};
use crate::dom::{Document, DomResult, Tag};
use crate::model::contact::Contact;
use crate::ui::action::Action;

/// Rebuilds `container` from `contacts` and returns the rendered row count.
pub fn render_contacts<D: Document>(
    document: &D,
    container: &D::Node,
    contacts: &[Contact],
) -> DomResult<usize> {
    document.clear_children(container)?;
    for contact in contacts {
        let row = render_contact(document, contact)?;
        document.append_child(container, &row)?;
    }
    Ok(contacts.len())
}

fn render_contact<D: Document>(document: &D, contact: &Contact) -> DomResult<D::Node> {
    let delete_el = create_element(
        document,
        Tag::Button,
        Props::new().class_name("remove").text("Delete"),
    )?;
    Action::Remove(contact.id.clone()).apply_to(document, &delete_el)?;

    let name_el = create_element(document, Tag::H2, Props::new().text(contact.name.as_str()))?;
    let email_el = match contact.email.as_deref() {
        Some(email) => Some(create_element(document, Tag::P, Props::new().text(email))?),
        None => None,
    };
    let infos_el = create_element(
        document,
        Tag::Div,
        Props::new()
            .class_name("infos")
            .node(name_el)
            .child(email_el.map(Child::Node)),
    )?;

    create_element(
        document,
        Tag::Div,
        Props::new()
            .class_name("contact")
            .node(infos_el)
            .node(delete_el),
    )
}
