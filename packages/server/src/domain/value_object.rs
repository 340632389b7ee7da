//! 値オブジェクト
//!
//! 生の `String` をそのまま扱わず、生成時に検証済みであることを型で保証します。

use std::fmt;

use super::error::ValueObjectError;

/// 投票の選択肢が指定されなかったときに使うデフォルト
pub const DEFAULT_VOTE_OPTIONS: [&str; 6] = ["1", "2", "3", "5", "8", "13"];

/// Room の識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    /// 新しい RoomId を作成
    ///
    /// # Errors
    ///
    /// 空文字列の場合は `ValueObjectError::EmptyRoomId`
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyRoomId);
        }
        Ok(Self(value))
    }

    /// 生成済みトークンから `room-<token>` 形式の RoomId を作る
    pub(super) fn generated(token: &str) -> Self {
        Self(format!("room-{token}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room 内でのユーザー識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// 新しい UserId を作成
    ///
    /// # Errors
    ///
    /// 空文字列の場合は `ValueObjectError::EmptyUserId`
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyUserId);
        }
        Ok(Self(value))
    }

    /// 生成済みトークンから `user-<token>` 形式の UserId を作る
    pub(super) fn generated(token: &str) -> Self {
        Self(format!("user-{token}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 表示名（Room 内で一意、大文字小文字を区別する）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// 新しい Username を作成
    ///
    /// # Errors
    ///
    /// 空文字列の場合は `ValueObjectError::EmptyUsername`
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyUsername);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 投票値
///
/// `VoteOptions` に含まれるかどうかは検証しない（任意の文字列を受け付ける）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote(String);

impl Vote {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Room で選択可能な投票値の並び（空にならない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOptions(Vec<String>);

impl VoteOptions {
    /// 指定された選択肢から VoteOptions を作成
    ///
    /// `None` または空の場合は `DEFAULT_VOTE_OPTIONS` を使う。
    pub fn new(options: Option<Vec<String>>) -> Self {
        match options {
            Some(options) if !options.is_empty() => Self(options),
            _ => Self::default(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Default for VoteOptions {
    fn default() -> Self {
        Self(DEFAULT_VOTE_OPTIONS.iter().map(|s| s.to_string()).collect())
    }
}
