//! UseCase: Room 作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - Room ID の指定・自動生成、投票の選択肢のデフォルト
//!
//! ### どのような状況を想定しているか
//! - 正常系：ID 指定あり／なしでの作成
//! - 異常系：既存の Room ID を指定
//! - エッジケース：自動生成した ID が既存の Room と衝突

use std::sync::Arc;

use crate::domain::{
    IdGenerator, RepositoryError, Room, RoomId, RoomRepository, VoteOptions, generate_room_id,
};

use super::error::CreateRoomError;

/// 自動生成した Room ID が衝突したときに再生成する回数の上限
pub const MAX_ROOM_ID_ATTEMPTS: usize = 8;

/// Room 作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// Room ID の生成器
    id_generator: Arc<dyn IdGenerator>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Room 作成を実行
    ///
    /// # Arguments
    ///
    /// * `custom_room_id` - 作成者が指定した Room ID（`None` なら自動生成）
    /// * `vote_options` - 投票の選択肢
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 作成した Room
    /// * `Err(CreateRoomError)` - 作成失敗
    pub async fn execute(
        &self,
        custom_room_id: Option<RoomId>,
        vote_options: VoteOptions,
    ) -> Result<Room, CreateRoomError> {
        if let Some(room_id) = custom_room_id {
            let room = Room::new(room_id, vote_options);
            self.repository.insert_room(room.clone()).await?;
            tracing::info!("Room '{}' created", room.id());
            return Ok(room);
        }

        for _ in 0..MAX_ROOM_ID_ATTEMPTS {
            let room = Room::new(
                generate_room_id(self.id_generator.as_ref()),
                vote_options.clone(),
            );
            match self.repository.insert_room(room.clone()).await {
                Ok(()) => {
                    tracing::info!("Room '{}' created", room.id());
                    return Ok(room);
                }
                Err(RepositoryError::RoomAlreadyExists(room_id)) => {
                    tracing::warn!("Generated room id '{}' is already in use, retrying", room_id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(CreateRoomError::IdGenerationExhausted(MAX_ROOM_ID_ATTEMPTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockRoomRepository, SequentialIdGenerator},
        infrastructure::repository::InMemoryRoomRepository,
    };

    /// 常に同じトークンを返す生成器
    struct FixedIdGenerator(&'static str);

    impl IdGenerator for FixedIdGenerator {
        fn next_token(&self) -> String {
            self.0.to_string()
        }
    }

    fn create_usecase() -> (Arc<InMemoryRoomRepository>, CreateRoomUseCase) {
        let repository = Arc::new(InMemoryRoomRepository::default());
        let usecase =
            CreateRoomUseCase::new(repository.clone(), Arc::new(SequentialIdGenerator::new()));
        (repository, usecase)
    }

    fn room_id(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_room_with_custom_id() {
        // テスト項目: 指定した ID で空の Room が作成される
        // given (前提条件):
        let (repository, usecase) = create_usecase();

        // when (操作):
        let result = usecase
            .execute(Some(room_id("r1")), VoteOptions::new(None))
            .await;

        // then (期待する結果):
        let room = result.unwrap();
        assert_eq!(room.id().as_str(), "r1");
        assert!(room.users.is_empty());
        assert!(room.votes.is_empty());
        assert!(!room.show_votes);
        assert_eq!(room.host, None);
        assert_eq!(room.vote_options.as_slice(), ["1", "2", "3", "5", "8", "13"]);
        assert_eq!(repository.get_room(&room_id("r1")).await.unwrap(), room);
    }

    #[tokio::test]
    async fn test_create_room_with_duplicate_id() {
        // テスト項目: 既存の Room ID を指定すると 2 回目は Conflict になる
        // given (前提条件):
        let (repository, usecase) = create_usecase();
        usecase
            .execute(Some(room_id("r1")), VoteOptions::new(None))
            .await
            .unwrap();

        // when (操作):
        let result = usecase
            .execute(
                Some(room_id("r1")),
                VoteOptions::new(Some(vec!["XL".to_string()])),
            )
            .await;

        // then (期待する結果): 既存の Room は上書きされない
        assert_eq!(
            result,
            Err(CreateRoomError::RoomIdAlreadyExists("r1".to_string()))
        );
        assert_eq!(repository.count_rooms().await, 1);
        let room = repository.get_room(&room_id("r1")).await.unwrap();
        assert_eq!(room.vote_options, VoteOptions::default());
    }

    #[tokio::test]
    async fn test_create_room_without_id_never_collides() {
        // テスト項目: ID を指定しない作成は毎回別の ID になる
        // given (前提条件):
        let (repository, usecase) = create_usecase();

        // when (操作):
        let first = usecase.execute(None, VoteOptions::new(None)).await.unwrap();
        let second = usecase.execute(None, VoteOptions::new(None)).await.unwrap();

        // then (期待する結果):
        assert_ne!(first.id(), second.id());
        assert!(first.id().as_str().starts_with("room-"));
        assert_eq!(repository.count_rooms().await, 2);
    }

    #[tokio::test]
    async fn test_generated_id_skips_custom_id_in_use() {
        // テスト項目: 生成した ID が指定 ID の Room と衝突した場合は再生成される
        // given (前提条件): 次に生成される ID と同じ ID の Room が既にある
        let (repository, usecase) = create_usecase();
        usecase
            .execute(Some(room_id("room-1")), VoteOptions::new(None))
            .await
            .unwrap();

        // when (操作):
        let room = usecase.execute(None, VoteOptions::new(None)).await.unwrap();

        // then (期待する結果):
        assert_eq!(room.id().as_str(), "room-2");
        assert_eq!(repository.count_rooms().await, 2);
    }

    #[tokio::test]
    async fn test_id_generation_exhausted() {
        // テスト項目: 生成した ID が衝突し続けると Internal エラーになる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::default());
        let usecase = CreateRoomUseCase::new(repository.clone(), Arc::new(FixedIdGenerator("x")));
        usecase.execute(None, VoteOptions::new(None)).await.unwrap();

        // when (操作):
        let result = usecase.execute(None, VoteOptions::new(None)).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(CreateRoomError::IdGenerationExhausted(MAX_ROOM_ID_ATTEMPTS))
        );
        assert_eq!(repository.count_rooms().await, 1);
    }

    #[tokio::test]
    async fn test_generated_id_stops_on_unexpected_repository_error() {
        // テスト項目: 衝突以外の Repository エラーでは再試行せずに返す
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_insert_room()
            .times(1)
            .returning(|room| Err(RepositoryError::RoomNotFound(room.id().to_string())));
        let usecase =
            CreateRoomUseCase::new(Arc::new(repository), Arc::new(SequentialIdGenerator::new()));

        // when (操作):
        let result = usecase.execute(None, VoteOptions::new(None)).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(CreateRoomError::Repository(RepositoryError::RoomNotFound(
                "room-1".to_string()
            )))
        );
    }
}
