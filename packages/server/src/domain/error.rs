//! ドメイン層のエラー定義

use thiserror::Error;

/// 値オブジェクトの生成に失敗したときのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("roomId must not be empty")]
    EmptyRoomId,
    #[error("userId must not be empty")]
    EmptyUserId,
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Room エンティティの操作に失敗したときのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// 同じ username のユーザーが既に Room にいる
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),
    /// 同じ UserId のユーザーが既に Room にいる（ID 生成の衝突）
    #[error("user id '{0}' is already in use")]
    DuplicateUserId(String),
    /// 指定した username のユーザーが Room にいない
    #[error("user '{0}' not found")]
    UserNotFound(String),
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
    #[error("room '{0}' already exists")]
    RoomAlreadyExists(String),
    #[error("room '{room_id}': {source}")]
    Room {
        room_id: String,
        #[source]
        source: RoomError,
    },
}
