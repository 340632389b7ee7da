//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{RepositoryError, Room, RoomId, User, Username, Vote};

/// Room Repository trait
///
/// 複数の Room を room-id で管理するデータストアへのインターフェース。
/// 各メソッドは「検索 → 変更」を 1 回の呼び出しの中で原子的に行い、
/// 失敗した場合はストアを一切変更しない。
///
/// ## 依存性の逆転（DIP）
///
/// - ドメイン層が必要とするインターフェースをドメイン層自身が定義
/// - Infrastructure 層がドメイン層のインターフェースに依存
/// - UseCase 層はこの trait に依存し、具体的な実装には依存しない
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room を追加（同じ ID の Room があれば `RoomAlreadyExists`）
    async fn insert_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// Room を取得
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// Room を削除し、削除した Room を返す
    async fn remove_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// ユーザーを Room に追加し、更新後の Room を返す
    async fn add_user(&self, room_id: &RoomId, user: User) -> Result<Room, RepositoryError>;

    /// username のユーザーの投票を記録
    async fn record_vote(
        &self,
        room_id: &RoomId,
        username: &Username,
        vote: Vote,
    ) -> Result<(), RepositoryError>;

    /// 投票を公開し、更新後の Room を返す
    async fn reveal_votes(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// 投票をリセットし、更新後の Room を返す
    async fn reset_votes(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// 現在の Room 数
    async fn count_rooms(&self) -> usize;
}
