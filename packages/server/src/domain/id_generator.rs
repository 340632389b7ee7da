//! ID generation with a generator abstraction for testability.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use super::{RoomId, UserId};

/// Source of unique identifier tokens
pub trait IdGenerator: Send + Sync {
    /// Return a fresh token. Tokens must not repeat within one process.
    fn next_token(&self) -> String;
}

/// Production generator backed by random UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for testing (returns "1", "2", "3", ...)
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_token(&self) -> String {
        (self.counter.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

/// Build a room id of the form `room-<token>`
pub fn generate_room_id(generator: &dyn IdGenerator) -> RoomId {
    RoomId::generated(&generator.next_token())
}

/// Build a user id of the form `user-<token>`
pub fn generate_user_id(generator: &dyn IdGenerator) -> UserId {
    UserId::generated(&generator.next_token())
}
