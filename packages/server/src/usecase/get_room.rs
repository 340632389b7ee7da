//! UseCase: Room 取得処理

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::RoomLookupError;

/// Room 取得のユースケース
pub struct GetRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomUseCase {
    /// 新しい GetRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room 取得を実行
    ///
    /// 投票を見せるかどうかは返した Room の `show_votes` で判断する（変換は DTO 層）。
    pub async fn execute(&self, room_id: RoomId) -> Result<Room, RoomLookupError> {
        let room = self.repository.get_room(&room_id).await?;
        tracing::debug!("Room '{}' fetched ({} users)", room_id, room.users.len());
        Ok(room)
    }
}
