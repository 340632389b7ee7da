//! UseCase: 投票公開処理

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::RoomLookupError;

/// 投票公開のユースケース
pub struct RevealVotesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RevealVotesUseCase {
    /// 新しい RevealVotesUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 投票公開を実行（公開済みの Room に対しては何も変わらない）
    pub async fn execute(&self, room_id: RoomId) -> Result<Room, RoomLookupError> {
        let room = self.repository.reveal_votes(&room_id).await?;
        tracing::info!("Votes revealed in room '{}' ({} votes)", room_id, room.votes.len());
        Ok(room)
    }
}
