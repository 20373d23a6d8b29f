//! Static page skeleton.
//!
//! # Responsibility
//! - Build the title, contact container and add form once at startup.
//!
//! # Invariants
//! - Skeleton nodes are created once and never rebuilt; only the contact
//!   container's children change afterwards.

use crate::dom::element::{create_element, Props};
use crate::dom::{Document, DomResult, Tag};
use crate::ui::action::Action;

/// Handles to the skeleton nodes the controller keeps using.
#[derive(Debug, Clone)]
pub struct AppView<N> {
    /// Outer `div.app`; hosts attach their click listener here.
    pub app: N,
    /// `h1.title` heading.
    pub title: N,
    /// `div.contacts`; the only subtree rebuilt on render.
    pub contacts: N,
    /// Name input of the add form.
    pub name_input: N,
    /// Email input of the add form; may be left empty.
    pub email_input: N,
    /// Button tagged with the add action.
    pub add_button: N,
}

struct AddForm<N> {
    form: N,
    name_input: N,
    email_input: N,
    add_button: N,
}

/// Builds the app skeleton and appends it to `mount`.
pub fn build_app<D: Document>(document: &D, mount: &D::Node, title: &str) -> DomResult<AppView<D::Node>> {
    let title_el = create_element(document, Tag::H1, Props::new().class_name("title").text(title))?;
    let contacts_el = create_element(document, Tag::Div, Props::new().class_name("contacts"))?;
    let add_form = build_add_form(document)?;
    let app_el = create_element(
        document,
        Tag::Div,
        Props::new()
            .class_name("app")
            .node(title_el.clone())
            .node(contacts_el.clone())
            .node(add_form.form),
    )?;
    document.append_child(mount, &app_el)?;

    Ok(AppView {
        app: app_el,
        title: title_el,
        contacts: contacts_el,
        name_input: add_form.name_input,
        email_input: add_form.email_input,
        add_button: add_form.add_button,
    })
}

fn build_add_form<D: Document>(document: &D) -> DomResult<AddForm<D::Node>> {
    let name_input = create_element(document, Tag::Input, Props::new())?;
    document.set_attribute(&name_input, "placeholder", "name")?;
    let email_input = create_element(document, Tag::Input, Props::new())?;
    document.set_attribute(&email_input, "placeholder", "email")?;
    let add_button = create_element(document, Tag::Button, Props::new().text("Add"))?;
    Action::Add.apply_to(document, &add_button)?;

    let form = create_element(
        document,
        Tag::Div,
        Props::new()
            .class_name("add")
            .node(name_input.clone())
            .node(email_input.clone())
            .node(add_button.clone()),
    )?;
    Ok(AddForm {
        form,
        name_input,
        email_input,
        add_button,
    })
}

#[cfg(test)]
mod tests {
    use super::build_app;
    use crate::dom::memory::MemoryDocument;
    use crate::dom::Document;

    #[test]
    fn skeleton_matches_expected_markup() {
        let document = MemoryDocument::with_root("root");
        let root = document.element_by_id("root").unwrap();
        let view = build_app(&document, &root, "Contacts").unwrap();

        assert_eq!(
            document.to_html(view.app).unwrap(),
            concat!(
                "<div class=\"app\">",
                "<h1 class=\"title\">Contacts</h1>",
                "<div class=\"contacts\"></div>",
                "<div class=\"add\">",
                "<input placeholder=\"name\">",
                "<input placeholder=\"email\">",
                "<button data-action=\"add\">Add</button>",
                "</div>",
                "</div>"
            )
        );
        assert_eq!(document.children(root).unwrap(), vec![view.app]);
    }
}
