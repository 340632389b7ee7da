//! UseCase: ラウンドのリセット処理

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::RoomLookupError;

/// ラウンドリセットのユースケース
pub struct ResetVotesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl ResetVotesUseCase {
    /// 新しい ResetVotesUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// リセットを実行
    ///
    /// 投票をクリアして非公開に戻す。ユーザー・host・選択肢はそのまま。
    pub async fn execute(&self, room_id: RoomId) -> Result<Room, RoomLookupError> {
        let room = self.repository.reset_votes(&room_id).await?;
        tracing::info!("Round reset in room '{}'", room_id);
        Ok(room)
    }
}
