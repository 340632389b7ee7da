//! HTTP API request / response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `POST /rooms` request body (every field optional)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequestDto {
    pub room_id: Option<String>,
    pub vote_options: Option<Vec<String>>,
}

/// `POST /rooms` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponseDto {
    pub room_id: String,
    pub vote_options: Vec<String>,
}

/// `POST /rooms/{room_id}/join` request body
#[derive(Debug, Clone, Deserialize)]
pub struct JoinRoomRequestDto {
    pub username: String,
}

/// `POST /rooms/{room_id}/join` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomResponseDto {
    pub message: String,
    pub user_id: String,
}

/// `POST /rooms/{room_id}/vote` request body
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitVoteRequestDto {
    pub username: String,
    pub vote: String,
}

/// A user as seen by `GET /rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub vote: Option<String>,
}

/// `GET /rooms/{room_id}` response body
///
/// `votes` is omitted entirely until the votes are revealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub users: BTreeMap<String, UserDto>,
    pub show_votes: bool,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<BTreeMap<String, String>>,
}

/// Generic `{message}` body used by successful commands and by errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health probe response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

impl HealthDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
