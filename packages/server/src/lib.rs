//! Session-state server for a Planning Poker estimation tool.
//!
//! Clients create a room, join it, submit votes, reveal them and reset the
//! round. All state lives in process memory, addressed by room id.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
