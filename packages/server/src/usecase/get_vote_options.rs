//! UseCase: 投票の選択肢取得処理

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository, VoteOptions};

use super::error::RoomLookupError;

/// 投票の選択肢取得のユースケース
pub struct GetVoteOptionsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetVoteOptionsUseCase {
    /// 新しい GetVoteOptionsUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room の選択肢を作成時の順序のまま返す
    pub async fn execute(&self, room_id: RoomId) -> Result<VoteOptions, RoomLookupError> {
        let room = self.repository.get_room(&room_id).await?;
        Ok(room.vote_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Room, infrastructure::repository::InMemoryRoomRepository};

    fn room_id(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_get_vote_options_keeps_order() {
        // テスト項目: 作成時に指定した選択肢が順序どおりに返る
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::default());
        let options = vec!["13".to_string(), "1".to_string(), "?".to_string()];
        repository
            .insert_room(Room::new(room_id("r1"), VoteOptions::new(Some(options.clone()))))
            .await
            .unwrap();
        let usecase = GetVoteOptionsUseCase::new(repository);

        // when (操作):
        let result = usecase.execute(room_id("r1")).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().into_vec(), options);
    }

    #[tokio::test]
    async fn test_get_vote_options_unknown_room() {
        // テスト項目: 存在しない Room は NotFound になる
        // given (前提条件):
        let usecase = GetVoteOptionsUseCase::new(Arc::new(InMemoryRoomRepository::default()));

        // when (操作):
        let result = usecase.execute(room_id("missing")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomLookupError::RoomNotFound("missing".to_string()))
        );
    }
}
