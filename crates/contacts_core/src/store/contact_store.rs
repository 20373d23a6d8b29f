//! In-memory contact store.
//!
//! # Responsibility
//! - Keep the ordered contact sequence for one session.
//! - Apply add/remove mutations; rendering is the controller's job.
//!
//! # Invariants
//! - Contacts keep insertion order; `add` always appends.
//! - `add` with an empty name is a no-op, so no stored contact has an empty name.
//! - `remove` of an unknown id leaves the sequence untouched.

use crate::model::contact::{Contact, ContactId};
use crate::model::id::{IdGenerator, RandomIdGenerator};

/// Ordered contact collection plus the id source for new entries.
#[derive(Debug, Clone)]
pub struct ContactStore<G: IdGenerator = RandomIdGenerator> {
    contacts: Vec<Contact>,
    ids: G,
}

impl ContactStore {
    /// Creates an empty store using random ids.
    pub fn new() -> Self {
        Self::with_generator(RandomIdGenerator::new())
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ContactStore<G> {
    /// Creates an empty store using the provided id source.
    pub fn with_generator(ids: G) -> Self {
        Self::with_contacts(Vec::new(), ids)
    }

    /// Creates a store pre-filled with `contacts`, in the given order.
    ///
    /// Seed data is trusted as-is; ids and names are not re-validated.
    pub fn with_contacts(contacts: Vec<Contact>, ids: G) -> Self {
        Self { contacts, ids }
    }

    /// Appends a new contact and returns its fresh id.
    ///
    /// # Contract
    /// - Empty `name` returns `None` and changes nothing.
    /// - Empty `email` is stored as `None`; anything else is kept verbatim.
    /// - No uniqueness check on name or email.
    pub fn add(&mut self, name: &str, email: &str) -> Option<ContactId> {
        if name.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        let email = (!email.is_empty()).then(|| email.to_string());
        self.contacts
            .push(Contact::new(id.clone(), name.to_string(), email));
        Some(id)
    }

    /// Removes the contact with `id` and returns it, if present.
    pub fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|contact| &contact.id == id)?;
        Some(self.contacts.remove(index))
    }

    /// Looks up a contact by id.
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// All contacts in display order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contact ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &ContactId> {
        self.contacts.iter().map(|contact| &contact.id)
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ContactStore;
    use crate::model::contact::{seed_contacts, ContactId};
    use crate::model::id::SequentialIdGenerator;

    fn seeded() -> ContactStore<SequentialIdGenerator> {
        ContactStore::with_contacts(seed_contacts(), SequentialIdGenerator::default())
    }

    #[test]
    fn add_appends_with_generated_id() {
        let mut store = seeded();
        let id = store.add("Carol", "carol@example.com").unwrap();

        assert_eq!(id.as_str(), "c1");
        assert_eq!(store.len(), 4);
        let last = store.contacts().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.email.as_deref(), Some("carol@example.com"));
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut store = seeded();
        assert!(store.add("", "someone@example.com").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn add_stores_empty_email_as_none() {
        let mut store = seeded();
        let id = store.add("Carol", "").unwrap();
        assert_eq!(store.get(&id).unwrap().email, None);
    }

    #[test]
    fn add_allows_duplicate_names() {
        let mut store = seeded();
        let first = store.add("Bob", "").unwrap();
        let second = store.add("Bob", "").unwrap();
        assert_ne!(first, second);
        assert_eq!(store.contacts().iter().filter(|c| c.name == "Bob").count(), 3);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.contacts().to_vec();
        assert!(store.remove(&ContactId::from("missing")).is_none());
        assert_eq!(store.contacts(), before.as_slice());
    }

    #[test]
    fn remove_keeps_order_of_remaining_contacts() {
        let mut store = seeded();
        let removed = store.remove(&ContactId::from("8mopn7")).unwrap();
        assert_eq!(removed.name, "Bob");

        let ids: Vec<&str> = store.ids().map(ContactId::as_str).collect();
        assert_eq!(ids, vec!["p9n51g", "u7oo0d"]);
    }

    #[test]
    fn new_store_is_empty() {
        let store = ContactStore::new();
        assert!(store.is_empty());
    }
}
