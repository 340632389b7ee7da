//! UseCase: Room 参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - username の重複チェック、host の決定
//!
//! ### なぜこのテストが必要か
//! - host は最初の参加者で一度だけ決まることを保証
//! - username の重複は Room ごとに判定されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初の参加者・2 人目以降の参加者
//! - 異常系：存在しない Room、username の重複
//! - エッジケース：別の Room で同じ username を使う

use std::sync::Arc;

use crate::domain::{
    IdGenerator, RepositoryError, Room, RoomError, RoomId, RoomRepository, User, UserId, Username,
    generate_user_id,
};

use super::error::JoinRoomError;

/// 生成した UserId が Room 内で衝突したときに再生成する回数の上限
pub const MAX_USER_ID_ATTEMPTS: usize = 8;

/// Room 参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// UserId の生成器
    id_generator: Arc<dyn IdGenerator>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Room 参加を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 参加する Room の ID
    /// * `username` - 参加するユーザーの表示名
    ///
    /// # Returns
    ///
    /// * `Ok((UserId, Room))` - 発行した UserId と参加後の Room
    /// * `Err(JoinRoomError)` - 参加失敗
    pub async fn execute(
        &self,
        room_id: RoomId,
        username: Username,
    ) -> Result<(UserId, Room), JoinRoomError> {
        for _ in 0..MAX_USER_ID_ATTEMPTS {
            let user_id = generate_user_id(self.id_generator.as_ref());
            let user = User::new(user_id.clone(), username.clone());

            match self.repository.add_user(&room_id, user).await {
                Ok(room) => {
                    tracing::info!(
                        "User '{}' ({}) joined room '{}'",
                        username,
                        user_id,
                        room_id
                    );
                    if room.host.as_ref() == Some(&user_id) {
                        tracing::info!("User '{}' is the host of room '{}'", username, room_id);
                    }
                    return Ok((user_id, room));
                }
                Err(RepositoryError::Room {
                    source: RoomError::DuplicateUserId(taken),
                    ..
                }) => {
                    tracing::warn!("Generated user id '{}' is already in use, retrying", taken);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(JoinRoomError::IdGenerationExhausted(MAX_USER_ID_ATTEMPTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{SequentialIdGenerator, VoteOptions},
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn room_id(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    fn username(value: &str) -> Username {
        Username::new(value.to_string()).unwrap()
    }

    async fn create_test_repository(room_ids: &[&str]) -> Arc<InMemoryRoomRepository> {
        let repository = Arc::new(InMemoryRoomRepository::default());
        for id in room_ids {
            repository
                .insert_room(Room::new(room_id(id), VoteOptions::default()))
                .await
                .unwrap();
        }
        repository
    }

    /// 常に同じトークンを返す生成器
    struct FixedIdGenerator(&'static str);

    impl IdGenerator for FixedIdGenerator {
        fn next_token(&self) -> String {
            self.0.to_string()
        }
    }

    fn create_usecase(repository: Arc<InMemoryRoomRepository>) -> JoinRoomUseCase {
        JoinRoomUseCase::new(repository, Arc::new(SequentialIdGenerator::new()))
    }

    #[tokio::test]
    async fn test_first_joiner_becomes_host() {
        // テスト項目: 最初の参加者が host になり、2 人目では host が変わらない
        // given (前提条件):
        let repository = create_test_repository(&["r1"]).await;
        let usecase = create_usecase(repository.clone());

        // when (操作):
        let (alice_id, _) = usecase
            .execute(room_id("r1"), username("Alice"))
            .await
            .unwrap();
        let (bob_id, room) = usecase
            .execute(room_id("r1"), username("Bob"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_ne!(alice_id, bob_id);
        assert_eq!(room.host, Some(alice_id));
        assert_eq!(room.users.len(), 2);
        let bob = room.users.get(&bob_id).unwrap();
        assert_eq!(bob.username.as_str(), "Bob");
        assert_eq!(bob.vote, None);
    }

    #[tokio::test]
    async fn test_join_nonexistent_room() {
        // テスト項目: 存在しない Room には参加できない
        // given (前提条件):
        let repository = create_test_repository(&[]).await;
        let usecase = create_usecase(repository);

        // when (操作):
        let result = usecase.execute(room_id("missing"), username("Alice")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(JoinRoomError::RoomNotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_join_with_taken_username() {
        // テスト項目: 同じ Room で同じ username は使えず、Room は変更されない
        // given (前提条件):
        let repository = create_test_repository(&["r1"]).await;
        let usecase = create_usecase(repository.clone());
        usecase
            .execute(room_id("r1"), username("Alice"))
            .await
            .unwrap();

        // when (操作):
        let result = usecase.execute(room_id("r1"), username("Alice")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(JoinRoomError::UsernameAlreadyTaken("Alice".to_string()))
        );
        let room = repository.get_room(&room_id("r1")).await.unwrap();
        assert_eq!(room.users.len(), 1);
    }

    #[tokio::test]
    async fn test_same_username_in_different_rooms() {
        // テスト項目: 別の Room なら同じ username で参加できる
        // given (前提条件):
        let repository = create_test_repository(&["r1", "r2"]).await;
        let usecase = create_usecase(repository);
        usecase
            .execute(room_id("r1"), username("Alice"))
            .await
            .unwrap();

        // when (操作):
        let result = usecase.execute(room_id("r2"), username("Alice")).await;

        // then (期待する結果): r2 では Alice が host になる
        let (user_id, room) = result.unwrap();
        assert_eq!(room.host, Some(user_id));
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive() {
        // テスト項目: 大文字小文字が異なる username は別人として扱う
        // given (前提条件):
        let repository = create_test_repository(&["r1"]).await;
        let usecase = create_usecase(repository);
        usecase
            .execute(room_id("r1"), username("Alice"))
            .await
            .unwrap();

        // when (操作):
        let result = usecase.execute(room_id("r1"), username("alice")).await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generated_user_id_skips_id_in_use() {
        // テスト項目: 生成した UserId が Room 内で衝突した場合は再生成される
        // given (前提条件): 次に生成される ID と同じ ID のユーザーが既にいる
        let repository = create_test_repository(&["r1"]).await;
        repository
            .add_user(
                &room_id("r1"),
                User::new(UserId::new("user-1".to_string()).unwrap(), username("Zed")),
            )
            .await
            .unwrap();
        let usecase = create_usecase(repository.clone());

        // when (操作):
        let (user_id, room) = usecase
            .execute(room_id("r1"), username("Alice"))
            .await
            .unwrap();

        // then (期待する結果): host は最初の参加者のまま
        assert_eq!(user_id.as_str(), "user-2");
        assert_eq!(room.users.len(), 2);
        assert_eq!(room.host.as_ref().map(UserId::as_str), Some("user-1"));
    }

    #[tokio::test]
    async fn test_user_id_generation_exhausted() {
        // テスト項目: 生成した UserId が衝突し続けると Internal エラーになる
        // given (前提条件):
        let repository = create_test_repository(&["r1"]).await;
        let usecase = JoinRoomUseCase::new(repository.clone(), Arc::new(FixedIdGenerator("x")));
        usecase
            .execute(room_id("r1"), username("Alice"))
            .await
            .unwrap();

        // when (操作):
        let result = usecase.execute(room_id("r1"), username("Bob")).await;

        // then (期待する結果): Room は変更されない
        assert_eq!(
            result,
            Err(JoinRoomError::IdGenerationExhausted(MAX_USER_ID_ATTEMPTS))
        );
        let room = repository.get_room(&room_id("r1")).await.unwrap();
        assert_eq!(room.users.len(), 1);
    }
}
