//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record and its identifier.
//! - Own id generation so callers never fabricate ids by hand.
//!
//! # Invariants
//! - Every contact is identified by a `ContactId` unique within its store.

pub mod contact;
pub mod id;
