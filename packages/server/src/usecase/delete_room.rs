//! UseCase: Room 削除処理

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository};

use super::error::RoomLookupError;

/// Room 削除のユースケース
pub struct DeleteRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl DeleteRoomUseCase {
    /// 新しい DeleteRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room 削除を実行
    pub async fn execute(&self, room_id: RoomId) -> Result<(), RoomLookupError> {
        let room = self.repository.remove_room(&room_id).await?;
        let remaining = self.repository.count_rooms().await;
        tracing::info!(
            "Room '{}' deleted ({} users, {} rooms remaining)",
            room_id,
            room.users.len(),
            remaining
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Room, VoteOptions},
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn room_id(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        // テスト項目: 削除した Room は取得できなくなる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::default());
        repository
            .insert_room(Room::new(room_id("r1"), VoteOptions::default()))
            .await
            .unwrap();
        let usecase = DeleteRoomUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(room_id("r1")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repository.get_room(&room_id("r1")).await.is_err());
        assert_eq!(repository.count_rooms().await, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_room() {
        // テスト項目: 存在しない Room の削除は NotFound になる
        // given (前提条件):
        let usecase = DeleteRoomUseCase::new(Arc::new(InMemoryRoomRepository::default()));

        // when (操作):
        let result = usecase.execute(room_id("missing")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomLookupError::RoomNotFound("missing".to_string()))
        );
    }
}
