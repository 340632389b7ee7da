//! Conversion logic from domain entities to HTTP DTOs.

use crate::domain::entity;
use crate::infrastructure::dto::http as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::User> for dto::UserDto {
    fn from(model: entity::User) -> Self {
        Self {
            id: model.id.into_string(),
            username: model.username.into_string(),
            vote: model.vote.map(|vote| vote.into_string()),
        }
    }
}

impl From<entity::Room> for dto::RoomDetailDto {
    fn from(model: entity::Room) -> Self {
        let votes = model.visible_votes().map(|votes| {
            votes
                .iter()
                .map(|(username, vote)| (username.as_str().to_string(), vote.as_str().to_string()))
                .collect()
        });

        Self {
            users: model
                .users
                .into_iter()
                .map(|(id, user)| (id.into_string(), user.into()))
                .collect(),
            show_votes: model.show_votes,
            host: model.host.map(|id| id.into_string()).unwrap_or_default(),
            votes,
        }
    }
}

impl From<entity::Room> for dto::CreateRoomResponseDto {
    fn from(model: entity::Room) -> Self {
        Self {
            room_id: model.id().as_str().to_string(),
            vote_options: model.vote_options.into_vec(),
        }
    }
}
