//! Room API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use super::extract::ApiJson;
use crate::{
    domain::{RoomId, Username, Vote, VoteOptions},
    infrastructure::dto::http::{
        CreateRoomRequestDto, CreateRoomResponseDto, JoinRoomRequestDto, JoinRoomResponseDto,
        MessageDto, RoomDetailDto, SubmitVoteRequestDto,
    },
    ui::{error::ApiError, state::AppState},
};

/// Create a room (`POST /rooms`)
///
/// The body is optional: no body, or an empty one, creates a room with a
/// generated id and the default vote options. An empty `roomId` counts as absent.
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateRoomResponseDto>), ApiError> {
    let request: CreateRoomRequestDto = if body.iter().all(u8::is_ascii_whitespace) {
        CreateRoomRequestDto::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let custom_room_id = request
        .room_id
        .filter(|room_id| !room_id.is_empty())
        .map(RoomId::try_from)
        .transpose()?;
    let vote_options = VoteOptions::new(request.vote_options);

    let room = state
        .create_room_usecase
        .execute(custom_room_id, vote_options)
        .await?;

    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Get room state (`GET /rooms/{room_id}`)
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room = state.get_room_usecase.execute(RoomId::new(room_id)?).await?;

    // Domain Model から DTO への変換（非公開の投票はここで落とす）
    Ok(Json(room.into()))
}

/// Delete a room (`DELETE /rooms/{room_id}`)
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .delete_room_usecase
        .execute(RoomId::new(room_id)?)
        .await?;
    Ok(Json(MessageDto::new("Room deleted successfully")))
}

/// Join a room (`POST /rooms/{room_id}/join`)
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    ApiJson(request): ApiJson<JoinRoomRequestDto>,
) -> Result<Json<JoinRoomResponseDto>, ApiError> {
    let room_id = RoomId::new(room_id)?;
    let username = Username::new(request.username)?;

    let (user_id, _room) = state.join_room_usecase.execute(room_id, username).await?;

    Ok(Json(JoinRoomResponseDto {
        message: "Joined room".to_string(),
        user_id: user_id.into_string(),
    }))
}

/// Submit a vote (`POST /rooms/{room_id}/vote`)
pub async fn submit_vote(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    ApiJson(request): ApiJson<SubmitVoteRequestDto>,
) -> Result<Json<MessageDto>, ApiError> {
    let room_id = RoomId::new(room_id)?;
    let username = Username::new(request.username)?;

    state
        .submit_vote_usecase
        .execute(room_id, username, Vote::new(request.vote))
        .await?;

    Ok(Json(MessageDto::new("Vote recorded")))
}

/// Get the room's vote options in order (`GET /rooms/{room_id}/vote-options`)
pub async fn get_vote_options(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let vote_options = state
        .get_vote_options_usecase
        .execute(RoomId::new(room_id)?)
        .await?;
    Ok(Json(vote_options.into_vec()))
}

/// Reveal votes (`POST /rooms/{room_id}/reveal`)
pub async fn reveal_votes(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .reveal_votes_usecase
        .execute(RoomId::new(room_id)?)
        .await?;
    Ok(Json(MessageDto::new("Votes revealed")))
}

/// Reset the round (`POST /rooms/{room_id}/reset`)
pub async fn reset_votes(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .reset_votes_usecase
        .execute(RoomId::new(room_id)?)
        .await?;
    Ok(Json(MessageDto::new("Round reset")))
}
