//! エンティティ: Room と User

use std::collections::BTreeMap;

use super::{
    error::RoomError,
    value_object::{RoomId, UserId, Username, Vote, VoteOptions},
};

/// Room に参加しているユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    /// 今のラウンドで未投票なら `None`
    pub vote: Option<Vote>,
}

impl User {
    /// 未投票の User を作成
    pub fn new(id: UserId, username: Username) -> Self {
        Self {
            id,
            username,
            vote: None,
        }
    }
}

/// Planning Poker の Room
///
/// 不変条件:
/// - `id` は作成後に変わらない
/// - 同じ `username` のユーザーは 2 人以上存在しない
/// - `host` は `None` か、`users` に存在するユーザーの ID
/// - `votes[username]` は、そのユーザーの `vote` が `Some` のときだけ存在する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    pub users: BTreeMap<UserId, User>,
    pub votes: BTreeMap<Username, Vote>,
    pub show_votes: bool,
    pub host: Option<UserId>,
    pub vote_options: VoteOptions,
}

impl Room {
    /// 空の Room を作成
    pub fn new(id: RoomId, vote_options: VoteOptions) -> Self {
        Self {
            id,
            users: BTreeMap::new(),
            votes: BTreeMap::new(),
            show_votes: false,
            host: None,
            vote_options,
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// username でユーザーを探す
    pub fn find_user_by_username(&self, username: &Username) -> Option<&User> {
        self.users.values().find(|user| &user.username == username)
    }

    /// ユーザーを追加する
    ///
    /// 最初に参加したユーザーが host になり、以降 host は変わらない。
    pub fn add_user(&mut self, user: User) -> Result<(), RoomError> {
        if self.find_user_by_username(&user.username).is_some() {
            return Err(RoomError::UsernameTaken(user.username.into_string()));
        }
        if self.users.contains_key(&user.id) {
            return Err(RoomError::DuplicateUserId(user.id.into_string()));
        }

        if self.users.is_empty() {
            self.host = Some(user.id.clone());
        }
        self.users.insert(user.id.clone(), user);

        Ok(())
    }

    /// 投票を記録する（同じユーザーの再投票は上書き）
    pub fn record_vote(&mut self, username: &Username, vote: Vote) -> Result<(), RoomError> {
        let user = self
            .users
            .values_mut()
            .find(|user| &user.username == username)
            .ok_or_else(|| RoomError::UserNotFound(username.as_str().to_string()))?;

        user.vote = Some(vote.clone());
        self.votes.insert(username.clone(), vote);

        Ok(())
    }

    /// 投票を公開する（冪等）
    pub fn reveal_votes(&mut self) {
        self.show_votes = true;
    }

    /// 次のラウンドのために投票をクリアする
    pub fn reset_votes(&mut self) {
        self.votes.clear();
        self.show_votes = false;
        for user in self.users.values_mut() {
            user.vote = None;
        }
    }

    /// 公開済みなら集計済みの投票を返す
    pub fn visible_votes(&self) -> Option<&BTreeMap<Username, Vote>> {
        self.show_votes.then_some(&self.votes)
    }
}
