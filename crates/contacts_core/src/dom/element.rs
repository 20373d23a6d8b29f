//! Element construction helpers.
//!
//! # Responsibility
//! - Build a ready-to-attach element from a tag, class name and children.
//! - Resolve required host containers by id.
//!
//! # Invariants
//! - Absent children are skipped, never rendered as placeholders.
//! - An empty class name leaves the `class` attribute unset.

use crate::dom::{Document, DomError, DomResult, Tag};

/// One child slot: literal text or an existing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child<N> {
    Text(String),
    Node(N),
}

impl<N> From<&str> for Child<N> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<N> From<String> for Child<N> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Optional configuration for `create_element`.
#[derive(Debug, Clone)]
pub struct Props<N> {
    class_name: Option<String>,
    children: Vec<Option<Child<N>>>,
}

impl<N> Default for Props<N> {
    fn default() -> Self {
        Self {
            class_name: None,
            children: Vec::new(),
        }
    }
}

impl<N> Props<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Appends one child slot; `None` is kept but skipped at build time.
    pub fn child(mut self, child: impl Into<Option<Child<N>>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Child::Text(text.into()))
    }

    pub fn node(self, node: N) -> Self {
        self.child(Child::Node(node))
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Option<Child<N>>>,
    {
        self.children.extend(children);
        self
    }
}

/// Creates a `tag` element with the class name and children from `props`.
pub fn create_element<D: Document>(
    document: &D,
    tag: Tag,
    props: Props<D::Node>,
) -> DomResult<D::Node> {
    let element = document.create_element(tag)?;
    if let Some(class_name) = props.class_name.as_deref().filter(|name| !name.is_empty()) {
        document.set_class_name(&element, class_name)?;
    }
    for child in props.children.into_iter().flatten() {
        let node = match child {
            Child::Text(text) => document.create_text(&text)?,
            Child::Node(node) => node,
        };
        document.append_child(&element, &node)?;
    }
    Ok(element)
}

/// Like `element_by_id`, but a missing element is an error.
pub fn get_element_by_id_or_err<D: Document>(document: &D, id: &str) -> DomResult<D::Node> {
    document
        .element_by_id(id)
        .ok_or_else(|| DomError::MissingElement { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::{create_element, get_element_by_id_or_err, Child, Props};
    use crate::dom::memory::MemoryDocument;
    use crate::dom::{DomError, Tag};

    #[test]
    fn create_element_sets_class_and_text() {
        let document = MemoryDocument::new();
        let title = create_element(
            &document,
            Tag::H1,
            Props::new().class_name("title").text("Contacts"),
        )
        .unwrap();

        assert_eq!(document.to_html(title).unwrap(), "<h1 class=\"title\">Contacts</h1>");
    }

    #[test]
    fn create_element_skips_absent_children() {
        let document = MemoryDocument::new();
        let name = create_element(&document, Tag::H2, Props::new().text("Alice")).unwrap();
        let infos = create_element(
            &document,
            Tag::Div,
            Props::new().node(name).child(None::<Child<_>>),
        )
        .unwrap();

        assert_eq!(document.children(infos).unwrap().len(), 1);
        assert_eq!(document.to_html(infos).unwrap(), "<div><h2>Alice</h2></div>");
    }

    #[test]
    fn create_element_ignores_empty_class_name() {
        let document = MemoryDocument::new();
        let div = create_element(&document, Tag::Div, Props::new().class_name("")).unwrap();
        assert_eq!(document.attribute(div, "class").unwrap(), None);
    }

    #[test]
    fn children_accepts_mixed_slots() {
        let document = MemoryDocument::new();
        let p = create_element(&document, Tag::P, Props::new().text("x")).unwrap();
        let div = create_element(
            &document,
            Tag::Div,
            Props::new().children(vec![Some(Child::from("a")), None, Some(Child::Node(p))]),
        )
        .unwrap();
        assert_eq!(document.to_html(div).unwrap(), "<div>a<p>x</p></div>");
    }

    #[test]
    fn get_element_by_id_or_err_reports_missing_id() {
        let document = MemoryDocument::new();
        let err = get_element_by_id_or_err(&document, "root").unwrap_err();
        assert_eq!(
            err,
            DomError::MissingElement {
                id: "root".to_string()
            }
        );

        let document = MemoryDocument::with_root("root");
        assert!(get_element_by_id_or_err(&document, "root").is_ok());
    }
}
