//! UseCase layer: one use case per room operation.

mod create_room;
mod delete_room;
pub mod error;
mod get_room;
mod get_vote_options;
mod join_room;
mod reset_votes;
mod reveal_votes;
mod submit_vote;

pub use create_room::{CreateRoomUseCase, MAX_ROOM_ID_ATTEMPTS};
pub use delete_room::DeleteRoomUseCase;
pub use error::{
    ClassifiedError, CreateRoomError, ErrorKind, JoinRoomError, RoomLookupError, SubmitVoteError,
};
pub use get_room::GetRoomUseCase;
pub use get_vote_options::GetVoteOptionsUseCase;
pub use join_room::{JoinRoomUseCase, MAX_USER_ID_ATTEMPTS};
pub use reset_votes::ResetVotesUseCase;
pub use reveal_votes::RevealVotesUseCase;
pub use submit_vote::SubmitVoteUseCase;
