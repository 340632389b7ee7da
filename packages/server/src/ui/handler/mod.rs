//! HTTP handlers.

mod extract;
mod health;
mod room;

pub use health::health_check;
pub use room::{
    create_room, delete_room, get_room, get_vote_options, join_room, reset_votes, reveal_votes,
    submit_vote,
};
