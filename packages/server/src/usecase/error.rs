//! UseCase 層のエラー定義
//!
//! `Display` の文言はそのままクライアントに返すメッセージになります
//! （`ErrorKind::Internal` のものを除く）。

use thiserror::Error;

use crate::domain::{RepositoryError, RoomError};

/// HTTP ステータスに対応するエラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400: Room ID・username の重複
    Conflict,
    /// 404: Room・ユーザーが存在しない
    NotFound,
    /// 500: 想定外のエラー（詳細はクライアントに返さない）
    Internal,
}

/// 種類を持つ UseCase エラー
pub trait ClassifiedError: std::error::Error {
    fn kind(&self) -> ErrorKind;
}

/// Room 作成のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateRoomError {
    #[error("Room ID already exists")]
    RoomIdAlreadyExists(String),
    #[error("failed to generate a unique room id after {0} attempts")]
    IdGenerationExhausted(usize),
    #[error("unexpected repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CreateRoomError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomAlreadyExists(room_id) => Self::RoomIdAlreadyExists(room_id),
            other => Self::Repository(other),
        }
    }
}

impl ClassifiedError for CreateRoomError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomIdAlreadyExists(_) => ErrorKind::Conflict,
            Self::IdGenerationExhausted(_) | Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Room を ID で参照する操作（取得・公開・リセット・削除・選択肢取得）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomLookupError {
    #[error("Room not found")]
    RoomNotFound(String),
    #[error("unexpected repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for RoomLookupError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(room_id) => Self::RoomNotFound(room_id),
            other => Self::Repository(other),
        }
    }
}

impl ClassifiedError for RoomLookupError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound(_) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Room 参加のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("Room not found")]
    RoomNotFound(String),
    #[error("Username already taken in this room")]
    UsernameAlreadyTaken(String),
    #[error("failed to generate a unique user id after {0} attempts")]
    IdGenerationExhausted(usize),
    #[error("unexpected repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for JoinRoomError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(room_id) => Self::RoomNotFound(room_id),
            RepositoryError::Room {
                source: RoomError::UsernameTaken(username),
                ..
            } => Self::UsernameAlreadyTaken(username),
            other => Self::Repository(other),
        }
    }
}

impl ClassifiedError for JoinRoomError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound(_) => ErrorKind::NotFound,
            Self::UsernameAlreadyTaken(_) => ErrorKind::Conflict,
            Self::IdGenerationExhausted(_) | Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// 投票のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitVoteError {
    #[error("Room not found")]
    RoomNotFound(String),
    #[error("User not found in room")]
    UserNotFound(String),
    #[error("unexpected repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for SubmitVoteError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(room_id) => Self::RoomNotFound(room_id),
            RepositoryError::Room {
                source: RoomError::UserNotFound(username),
                ..
            } => Self::UserNotFound(username),
            other => Self::Repository(other),
        }
    }
}

impl ClassifiedError for SubmitVoteError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound(_) | Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}
