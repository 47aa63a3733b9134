//! Entry identifier generation.

use crate::model::resume::EntryId;
use uuid::Uuid;

const RANDOM_ID_LEN: usize = 9;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces identifiers for new experience/education entries.
///
/// Injected into the editor so tests can use deterministic ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> EntryId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> EntryId,
{
    fn next_id(&mut self) -> EntryId {
        self()
    }
}

/// Short random lowercase alphanumeric tokens.
///
/// Not cryptographic; 9 base-36 digits make collisions within one document
/// negligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> EntryId {
        let mut value = Uuid::new_v4().as_u128();
        let mut token = String::with_capacity(RANDOM_ID_LEN);
        for _ in 0..RANDOM_ID_LEN {
            token.push(char::from(BASE36_DIGITS[(value % 36) as usize]));
            value /= 36;
        }
        token
    }
}

/// Deterministic `"{prefix}{n}"` ids starting at 1.
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

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntryId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
