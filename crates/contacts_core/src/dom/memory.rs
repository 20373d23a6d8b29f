//! In-memory document used by tests and headless previews.
//!
//! # Responsibility
//! - Implement `Document` over an arena of nodes with no platform dependency.
//! - Offer inspection helpers (HTML dump, class/tag queries, clicks).
//!
//! # Invariants
//! - Node handles are arena indexes and stay valid for the document lifetime;
//!   detached nodes are kept but are no longer reachable by id lookup.
//! - A node has at most one parent; appending re-parents it.
//! - The tree is acyclic: appending a node under itself or a descendant fails.
//! - Detached slots are never reclaimed, so every render grows the arena.
//!   Fine for tests and one-shot previews, not for long-lived sessions.

use crate::dom::{Document, DomError, DomResult, Tag};
use crate::ui::action::{Action, ACTION_ATTRIBUTE, CONTACT_ID_ATTRIBUTE};
use log::warn;
use std::cell::RefCell;

const ID_ATTRIBUTE: &str = "id";
const CLASS_ATTRIBUTE: &str = "class";

/// Handle to a node owned by a `MemoryDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: Tag,
        attributes: Vec<(String, String)>,
        value: String,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document tree.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<NodeData>>,
    body: RefCell<Vec<NodeId>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document whose body holds one `<div id="{root_id}">`.
    pub fn with_root(root_id: &str) -> Self {
        let document = Self::new();
        document.append_to_body(Tag::Div, root_id);
        document
    }

    /// Appends a top-level element carrying `id` and returns it.
    pub fn append_to_body(&self, tag: Tag, id: &str) -> NodeId {
        let node = self.push(NodeKind::Element {
            tag,
            attributes: vec![(ID_ATTRIBUTE.to_string(), id.to_string())],
            value: String::new(),
        });
        self.body.borrow_mut().push(node);
        node
    }

    /// Total nodes ever created, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn children(&self, node: NodeId) -> DomResult<Vec<NodeId>> {
        self.with_node(node, |data| data.children.clone())
    }

    pub fn parent(&self, node: NodeId) -> DomResult<Option<NodeId>> {
        self.with_node(node, |data| data.parent)
    }

    /// Returns the element tag, or `None` for text nodes.
    pub fn tag(&self, node: NodeId) -> DomResult<Option<Tag>> {
        self.with_node(node, |data| match &data.kind {
            NodeKind::Element { tag, .. } => Some(*tag),
            NodeKind::Text(_) => None,
        })
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> DomResult<Option<String>> {
        self.with_node(node, |data| match &data.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            NodeKind::Text(_) => None,
        })
    }

    /// Concatenated text of `node` and all its descendants.
    pub fn text_content(&self, node: NodeId) -> DomResult<String> {
        let nodes = self.nodes.borrow();
        lookup(&nodes, node)?;
        let mut out = String::new();
        collect_text(&nodes, node, &mut out);
        Ok(out)
    }

    /// Serializes `node` and its subtree to HTML.
    pub fn to_html(&self, node: NodeId) -> DomResult<String> {
        let nodes = self.nodes.borrow();
        lookup(&nodes, node)?;
        let mut out = String::new();
        write_html(&nodes, node, &mut out);
        Ok(out)
    }

    /// Descendants of `node` (excluding itself) whose class list has `class_name`.
    pub fn find_by_class(&self, node: NodeId, class_name: &str) -> DomResult<Vec<NodeId>> {
        self.find_descendants(node, |kind| match kind {
            NodeKind::Element { attributes, .. } => attributes.iter().any(|(key, value)| {
                key == CLASS_ATTRIBUTE && value.split_whitespace().any(|c| c == class_name)
            }),
            NodeKind::Text(_) => false,
        })
    }

    /// Descendants of `node` (excluding itself) with element tag `tag`.
    pub fn find_by_tag(&self, node: NodeId, tag: Tag) -> DomResult<Vec<NodeId>> {
        self.find_descendants(node, |kind| {
            matches!(kind, NodeKind::Element { tag: found, .. } if *found == tag)
        })
    }

    /// Nearest inclusive ancestor of `node` carrying attribute `name`.
    pub fn closest_with_attribute(&self, node: NodeId, name: &str) -> DomResult<Option<NodeId>> {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            let data = lookup(&nodes, id)?;
            if let NodeKind::Element { attributes, .. } = &data.kind {
                if attributes.iter().any(|(key, _)| key == name) {
                    return Ok(Some(id));
                }
            }
            current = data.parent;
        }
        Ok(None)
    }

    /// Simulates a click on `node` and resolves the action it triggers.
    ///
    /// Returns `None` when no ancestor carries an action, or when the
    /// action attributes are malformed (logged and dropped like in browsers).
    pub fn click(&self, node: NodeId) -> DomResult<Option<Action>> {
        let Some(target) = self.closest_with_attribute(node, ACTION_ATTRIBUTE)? else {
            return Ok(None);
        };
        let name = self.attribute(target, ACTION_ATTRIBUTE)?.unwrap_or_default();
        let contact_id = self.attribute(target, CONTACT_ID_ATTRIBUTE)?;
        match Action::decode(&name, contact_id.as_deref()) {
            Ok(action) => Ok(Some(action)),
            Err(err) => {
                warn!("event=click_dropped module=memory_document status=error reason={err}");
                Ok(None)
            }
        }
    }

    fn push(&self, kind: NodeKind) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId(nodes.len() - 1)
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&NodeData) -> T) -> DomResult<T> {
        let nodes = self.nodes.borrow();
        lookup(&nodes, node).map(f)
    }

    fn with_element_mut<T>(
        &self,
        node: NodeId,
        f: impl FnOnce(&mut Vec<(String, String)>, &mut String) -> T,
    ) -> DomResult<T> {
        let mut nodes = self.nodes.borrow_mut();
        let data = nodes.get_mut(node.0).ok_or(DomError::UnknownNode)?;
        match &mut data.kind {
            NodeKind::Element {
                attributes, value, ..
            } => Ok(f(attributes, value)),
            NodeKind::Text(_) => Err(DomError::NotAnElement),
        }
    }

    fn find_descendants(
        &self,
        node: NodeId,
        matches: impl Fn(&NodeKind) -> bool,
    ) -> DomResult<Vec<NodeId>> {
        let nodes = self.nodes.borrow();
        let mut stack: Vec<NodeId> = lookup(&nodes, node)?.children.iter().rev().copied().collect();
        let mut found = Vec::new();
        while let Some(id) = stack.pop() {
            let data = lookup(&nodes, id)?;
            if matches(&data.kind) {
                found.push(id);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        Ok(found)
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let mut stack: Vec<NodeId> = self.body.borrow().iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            let data = nodes.get(node.0)?;
            if let NodeKind::Element { attributes, .. } = &data.kind {
                if attributes
                    .iter()
                    .any(|(key, value)| key == ID_ATTRIBUTE && value == id)
                {
                    return Some(node);
                }
            }
            stack.extend(data.children.iter().rev().copied());
        }
        None
    }

    fn create_element(&self, tag: Tag) -> DomResult<NodeId> {
        Ok(self.push(NodeKind::Element {
            tag,
            attributes: Vec::new(),
            value: String::new(),
        }))
    }

    fn create_text(&self, text: &str) -> DomResult<NodeId> {
        Ok(self.push(NodeKind::Text(text.to_string())))
    }

    fn set_class_name(&self, node: &NodeId, class_name: &str) -> DomResult<()> {
        self.set_attribute(node, CLASS_ATTRIBUTE, class_name)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> DomResult<()> {
        self.with_element_mut(*node, |attributes, _| {
            match attributes.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        })
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> DomResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        match lookup(&nodes, *parent)?.kind {
            NodeKind::Element { .. } => {}
            NodeKind::Text(_) => return Err(DomError::NotAnElement),
        }
        let mut ancestor = Some(*parent);
        while let Some(id) = ancestor {
            if id == *child {
                return Err(DomError::InvalidHierarchy);
            }
            ancestor = lookup(&nodes, id)?.parent;
        }
        let previous_parent = lookup(&nodes, *child)?.parent;
        if let Some(previous) = previous_parent {
            nodes[previous.0].children.retain(|id| id != child);
        }
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
        Ok(())
    }

    fn clear_children(&self, node: &NodeId) -> DomResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(
            &mut nodes.get_mut(node.0).ok_or(DomError::UnknownNode)?.children,
        );
        for child in children {
            nodes[child.0].parent = None;
        }
        Ok(())
    }

    fn input_value(&self, input: &NodeId) -> DomResult<String> {
        self.with_element_mut(*input, |_, value| value.clone())
    }

    fn set_input_value(&self, input: &NodeId, value: &str) -> DomResult<()> {
        self.with_element_mut(*input, |_, current| *current = value.to_string())
    }
}

fn lookup(nodes: &[NodeData], node: NodeId) -> DomResult<&NodeData> {
    nodes.get(node.0).ok_or(DomError::UnknownNode)
}

fn collect_text(nodes: &[NodeData], node: NodeId, out: &mut String) {
    let data = &nodes[node.0];
    match &data.kind {
        NodeKind::Text(text) => out.push_str(text),
        NodeKind::Element { .. } => {
            for child in &data.children {
                collect_text(nodes, *child, out);
            }
        }
    }
}

fn write_html(nodes: &[NodeData], node: NodeId, out: &mut String) {
    let data = &nodes[node.0];
    match &data.kind {
        NodeKind::Text(text) => push_escaped(out, text, false),
        NodeKind::Element {
            tag, attributes, ..
        } => {
            out.push('<');
            out.push_str(tag.as_str());
            for (key, value) in attributes {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                push_escaped(out, value, true);
                out.push('"');
            }
            out.push('>');
            if tag.is_void() {
                return;
            }
            for child in &data.children {
                write_html(nodes, *child, out);
            }
            out.push_str("</");
            out.push_str(tag.as_str());
            out.push('>');
        }
    }
}

fn push_escaped(out: &mut String, value: &str, in_attribute: bool) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryDocument, NodeId};
    use crate::dom::{Document, DomError, Tag};

    #[test]
    fn element_by_id_ignores_detached_nodes() {
        let document = MemoryDocument::with_root("root");
        let root = document.element_by_id("root").unwrap();
        let inner = document.create_element(Tag::Div).unwrap();
        document.set_attribute(&inner, "id", "inner").unwrap();

        assert_eq!(document.element_by_id("inner"), None);
        document.append_child(&root, &inner).unwrap();
        assert_eq!(document.element_by_id("inner"), Some(inner));
        document.clear_children(&root).unwrap();
        assert_eq!(document.element_by_id("inner"), None);
        assert_eq!(document.parent(inner).unwrap(), None);
    }

    #[test]
    fn append_child_reparents() {
        let document = MemoryDocument::new();
        let a = document.create_element(Tag::Div).unwrap();
        let b = document.create_element(Tag::Div).unwrap();
        let text = document.create_text("hi").unwrap();

        document.append_child(&a, &text).unwrap();
        document.append_child(&b, &text).unwrap();

        assert!(document.children(a).unwrap().is_empty());
        assert_eq!(document.children(b).unwrap(), vec![text]);
    }

    #[test]
    fn text_nodes_reject_element_operations() {
        let document = MemoryDocument::new();
        let text = document.create_text("hi").unwrap();
        let div = document.create_element(Tag::Div).unwrap();

        assert_eq!(
            document.set_attribute(&text, "class", "x"),
            Err(DomError::NotAnElement)
        );
        assert_eq!(document.append_child(&text, &div), Err(DomError::NotAnElement));
    }

    #[test]
    fn append_child_rejects_cycles() {
        let document = MemoryDocument::new();
        let parent = document.create_element(Tag::Div).unwrap();
        let child = document.create_element(Tag::Div).unwrap();
        let grandchild = document.create_element(Tag::P).unwrap();
        document.append_child(&parent, &child).unwrap();
        document.append_child(&child, &grandchild).unwrap();

        assert_eq!(document.append_child(&parent, &parent), Err(DomError::InvalidHierarchy));
        assert_eq!(document.append_child(&child, &parent), Err(DomError::InvalidHierarchy));
        assert_eq!(
            document.append_child(&grandchild, &parent),
            Err(DomError::InvalidHierarchy)
        );

        assert_eq!(document.parent(parent).unwrap(), None);
        assert_eq!(document.to_html(parent).unwrap(), "<div><div><p></p></div></div>");
    }

    #[test]
    fn detached_nodes_stay_addressable_after_clear() {
        let document = MemoryDocument::new();
        let container = document.create_element(Tag::Div).unwrap();
        let row = document.create_element(Tag::P).unwrap();
        let text = document.create_text("old").unwrap();
        document.append_child(&row, &text).unwrap();
        document.append_child(&container, &row).unwrap();
        let before = document.node_count();

        document.clear_children(&container).unwrap();
        let fresh = document.create_element(Tag::P).unwrap();
        document.append_child(&container, &fresh).unwrap();

        assert_eq!(document.node_count(), before + 1);
        assert_eq!(document.text_content(row).unwrap(), "old");
        assert_eq!(document.children(container).unwrap(), vec![fresh]);
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let document = MemoryDocument::new();
        assert_eq!(document.to_html(NodeId(42)), Err(DomError::UnknownNode));
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let document = MemoryDocument::new();
        let p = document.create_element(Tag::P).unwrap();
        document.set_attribute(&p, "title", "a \"b\" & c").unwrap();
        let text = document.create_text("<script>&").unwrap();
        document.append_child(&p, &text).unwrap();

        assert_eq!(
            document.to_html(p).unwrap(),
            "<p title=\"a &quot;b&quot; &amp; c\">&lt;script&gt;&amp;</p>"
        );
    }

    #[test]
    fn input_is_void_and_keeps_value_out_of_html() {
        let document = MemoryDocument::new();
        let input = document.create_element(Tag::Input).unwrap();
        document.set_attribute(&input, "placeholder", "name").unwrap();
        document.set_input_value(&input, "typed").unwrap();

        assert_eq!(document.input_value(&input).unwrap(), "typed");
        assert_eq!(document.to_html(input).unwrap(), "<input placeholder=\"name\">");
    }

    #[test]
    fn find_by_class_matches_any_class_token() {
        let document = MemoryDocument::new();
        let parent = document.create_element(Tag::Div).unwrap();
        let child = document.create_element(Tag::Div).unwrap();
        document.set_class_name(&child, "contact selected").unwrap();
        document.append_child(&parent, &child).unwrap();

        assert_eq!(document.find_by_class(parent, "contact").unwrap(), vec![child]);
        assert!(document.find_by_class(parent, "cont").unwrap().is_empty());
    }
}
