//! Contact id generation.
//!
//! # Responsibility
//! - Produce short opaque ids for newly added contacts.
//!
//! # Invariants
//! - Generated ids are never checked against existing ones; collision
//!   probability is kept negligible by id length instead.
//! - Random ids are exactly `RANDOM_ID_LEN` chars from `[0-9a-z]`.

use crate::model::contact::ContactId;
use uuid::Uuid;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const RANDOM_ID_LEN: usize = 8;
/// 36^8, the number of distinct random ids.
const RANDOM_ID_SPACE: u64 = 2_821_109_907_456;
/// Low 62 bits of a v4 UUID carry no version/variant markers.
const RANDOM_BITS_MASK: u128 = (1 << 62) - 1;

/// Source of fresh contact ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> ContactId;
}

/// Random short ids backed by v4 UUID entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> ContactId {
        let bits = (Uuid::new_v4().as_u128() & RANDOM_BITS_MASK) as u64;
        ContactId::new(encode_base36(bits % RANDOM_ID_SPACE, RANDOM_ID_LEN))
    }
}

/// Deterministic `<prefix><n>` ids, starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("c")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ContactId {
        let id = ContactId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

fn encode_base36(mut value: u64, width: usize) -> String {
    let mut digits = vec![b'0'; width];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36_DIGITS[(value % 36) as usize];
        value /= 36;
    }
    digits.into_iter().map(char::from).collect()
}
