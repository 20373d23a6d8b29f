//! `Document` implementation over the browser DOM.
//!
//! # Responsibility
//! - Map core tree operations onto `web_sys` calls.
//! - Convert thrown `JsValue`s into `DomError::Host`.
//!
//! # Invariants
//! - Never panics; every failing browser call surfaces as `DomError`.

use contacts_core::{Document, DomError, DomResult, Tag};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement, Node};

/// Browser document handle.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Binds to `window.document`.
    pub fn from_window() -> DomResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| DomError::Host("no global window.document".to_string()))
    }
}

impl Document for WebDocument {
    type Node = Node;

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Node::from)
    }

    fn create_element(&self, tag: Tag) -> DomResult<Node> {
        self.document
            .create_element(tag.as_str())
            .map(Node::from)
            .map_err(host_error)
    }

    fn create_text(&self, text: &str) -> DomResult<Node> {
        Ok(self.document.create_text_node(text).into())
    }

    fn set_class_name(&self, node: &Node, class_name: &str) -> DomResult<()> {
        as_element(node)?.set_class_name(class_name);
        Ok(())
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> DomResult<()> {
        as_element(node)?
            .set_attribute(name, value)
            .map_err(host_error)
    }

    fn append_child(&self, parent: &Node, child: &Node) -> DomResult<()> {
        parent.append_child(child).map(drop).map_err(host_error)
    }

    fn clear_children(&self, node: &Node) -> DomResult<()> {
        node.set_text_content(None);
        Ok(())
    }

    fn input_value(&self, input: &Node) -> DomResult<String> {
        Ok(as_input(input)?.value())
    }

    fn set_input_value(&self, input: &Node, value: &str) -> DomResult<()> {
        as_input(input)?.set_value(value);
        Ok(())
    }
}

fn as_element(node: &Node) -> DomResult<&Element> {
    node.dyn_ref::<Element>().ok_or(DomError::NotAnElement)
}

fn as_input(node: &Node) -> DomResult<&HtmlInputElement> {
    node.dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| DomError::Host("element is not an <input>".to_string()))
}

fn host_error(value: JsValue) -> DomError {
    DomError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
