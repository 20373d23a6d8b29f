//! Host document abstraction.
//!
//! # Responsibility
//! - Describe the small set of tree operations the view layer needs.
//! - Keep core free of any concrete UI API; hosts implement `Document`.
//!
//! # Invariants
//! - Node handles are cheap to clone and refer to the same underlying node.
//! - Fallible host calls surface as `DomError`, never as panics.

pub mod element;
pub mod memory;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DomResult<T> = Result<T, DomError>;

/// Errors raised by document operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// A required element lookup by id found nothing.
    MissingElement { id: String },
    /// The node handle does not belong to this document.
    UnknownNode,
    /// The operation needs an element but got another node kind.
    NotAnElement,
    /// Appending would make a node its own ancestor.
    InvalidHierarchy,
    /// The host platform rejected the call.
    Host(String),
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingElement { id } => write!(f, "Cannot find element with id \"{id}\""),
            Self::UnknownNode => write!(f, "node does not belong to this document"),
            Self::NotAnElement => write!(f, "node is not an element"),
            Self::InvalidHierarchy => write!(f, "cannot append a node into itself or its descendant"),
            Self::Host(message) => write!(f, "host document error: {message}"),
        }
    }
}

impl Error for DomError {}

/// Element tags the view layer creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    H1,
    H2,
    H3,
    Button,
    P,
    Input,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Button => "button",
            Self::P => "p",
            Self::Input => "input",
        }
    }

    /// Void elements have no children and no closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Input)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tree operations a host UI must provide.
pub trait Document {
    type Node: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn create_element(&self, tag: Tag) -> DomResult<Self::Node>;
    fn create_text(&self, text: &str) -> DomResult<Self::Node>;
    fn set_class_name(&self, node: &Self::Node, class_name: &str) -> DomResult<()>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> DomResult<()>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> DomResult<()>;
    /// Detaches every child of `node`.
    fn clear_children(&self, node: &Self::Node) -> DomResult<()>;
    fn input_value(&self, input: &Self::Node) -> DomResult<String>;
    fn set_input_value(&self, input: &Self::Node, value: &str) -> DomResult<()>;
}
