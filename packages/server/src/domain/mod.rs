//! Domain layer: Room / User entities, value objects and the repository interface.

pub mod entity;
pub mod error;
pub mod id_generator;
pub mod repository;
pub mod value_object;

pub use entity::{Room, User};
pub use error::{RepositoryError, RoomError, ValueObjectError};
pub use id_generator::{
    IdGenerator, SequentialIdGenerator, UuidGenerator, generate_room_id, generate_user_id,
};
pub use repository::RoomRepository;
pub use value_object::{DEFAULT_VOTE_OPTIONS, RoomId, UserId, Username, Vote, VoteOptions};

#[cfg(test)]
pub use repository::MockRoomRepository;
