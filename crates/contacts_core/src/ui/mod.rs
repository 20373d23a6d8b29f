//! View layer built on the `Document` abstraction.
//!
//! # Responsibility
//! - Build the page skeleton once (`view`).
//! - Rebuild the contact list after every mutation (`render`).
//! - Encode/decode click targets as actions (`action`).

pub mod action;
pub mod render;
pub mod view;
