//! Session state.
//!
//! # Responsibility
//! - Hold the contact sequence for the lifetime of one page load.
//! - Stay independent of any UI so mutations are testable on their own.

pub mod contact_store;
