//! UseCase: 投票処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitVoteUseCase::execute() メソッド
//! - ユーザーの vote と Room の votes の両方が更新されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：投票、再投票（上書き）
//! - 異常系：存在しない Room、存在しないユーザー
//! - エッジケース：選択肢にない値での投票（検証しないので受け付ける）

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository, Username, Vote};

use super::error::SubmitVoteError;

/// 投票のユースケース
pub struct SubmitVoteUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl SubmitVoteUseCase {
    /// 新しい SubmitVoteUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 投票を実行
    ///
    /// 投票値が Room の選択肢に含まれるかは検証しない。
    ///
    /// # Arguments
    ///
    /// * `room_id` - Room の ID
    /// * `username` - 投票するユーザーの表示名
    /// * `vote` - 投票値
    pub async fn execute(
        &self,
        room_id: RoomId,
        username: Username,
        vote: Vote,
    ) -> Result<(), SubmitVoteError> {
        self.repository
            .record_vote(&room_id, &username, vote)
            .await?;
        tracing::info!("User '{}' voted in room '{}'", username, room_id);
        Ok(())
    }
}
