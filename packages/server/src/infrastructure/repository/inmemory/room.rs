//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## ロック
//!
//! すべての Room を 1 つの `Mutex` で保護し、各操作の「検索 → 変更」を
//! ロックを保持したまま行います。プロセスが終了すると状態は失われます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Room, RoomError, RoomId, RoomRepository, User, Username, Vote};

/// room-id から Room へのマッピング
pub type RoomStore = Arc<Mutex<HashMap<RoomId, Room>>>;

/// インメモリ Room Repository 実装
///
/// Room ドメインモデルを保持し、ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
pub struct InMemoryRoomRepository {
    /// room-id → Room
    rooms: RoomStore,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(rooms: RoomStore) -> Self {
        Self { rooms }
    }

    /// Room を 1 つロックしたまま変更する
    async fn update_room<T>(
        &self,
        room_id: &RoomId,
        f: impl FnOnce(&mut Room) -> Result<T, RoomError>,
    ) -> Result<T, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;

        f(room).map_err(|source| RepositoryError::Room {
            room_id: room_id.as_str().to_string(),
            source,
        })
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(room.id()) {
            return Err(RepositoryError::RoomAlreadyExists(
                room.id().as_str().to_string(),
            ));
        }
        rooms.insert(room.id().clone(), room);
        Ok(())
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))
    }

    async fn remove_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms
            .remove(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))
    }

    async fn add_user(&self, room_id: &RoomId, user: User) -> Result<Room, RepositoryError> {
        self.update_room(room_id, |room| {
            room.add_user(user)?;
            Ok(room.clone())
        })
        .await
    }

    async fn record_vote(
        &self,
        room_id: &RoomId,
        username: &Username,
        vote: Vote,
    ) -> Result<(), RepositoryError> {
        self.update_room(room_id, |room| room.record_vote(username, vote))
            .await
    }

    async fn reveal_votes(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        self.update_room(room_id, |room| {
            room.reveal_votes();
            Ok(room.clone())
        })
        .await
    }

    async fn reset_votes(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        self.update_room(room_id, |room| {
            room.reset_votes();
            Ok(room.clone())
        })
        .await
    }

    async fn count_rooms(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.len()
    }
}
