//! # Todo エンティティ
//!
//! このサービスが管理する唯一のエンティティと、その入力ペイロードを定義する。
//!
//! ## ライフサイクル
//!
//! ```text
//! create ──▶ [Todo] ──▶ update（item / completed を上書き）
//!              │  └───▶ toggle（completed を反転）
//!              └──────▶ delete（物理削除、論理削除なし）
//! ```
//!
//! - `id` は永続化層が採番し、以後変わらない
//! - `item` は 2〜100 文字（Unicode スカラー値で数える）。
//!   この制約は境界（[`TodoPayload`] の検証）でのみ保証し、ストレージ側では強制しない
//!
//! ## 型の役割
//!
//! | 型 | 役割 |
//! |----|------|
//! | [`TodoPayload`] | 受信したままの未検証ペイロード |
//! | [`TodoDraft`] | 検証済みの `(item, completed)`。永続化層はこれしか受け取らない |
//! | [`Todo`] | ID を持つ保存済みエンティティ |

use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{DomainError, validation::ValidationFailure};

/// Todo の一意識別子
///
/// 永続化層の自動採番値（64 bit 整数）をラップする。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の整数値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// パスパラメータなどの文字列から ID をパースする
    ///
    /// 10 進整数（符号付き可）として読めない場合は
    /// [`DomainError::MalformedIdentifier`] を返す。
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::MalformedIdentifier(raw.to_string()))
    }
}

/// 受信ペイロード `{item, completed}`
///
/// `completed` は省略時 `false`。`item` の省略と空文字列は `required` 違反になる。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TodoPayload {
    #[validate(required, length(min = 2, max = 100))]
    pub item:      Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TodoPayload {
    pub fn new(item: impl Into<String>, completed: bool) -> Self {
        Self {
            item: Some(item.into()),
            completed,
        }
    }

    /// ペイロードを検証し、永続化可能な [`TodoDraft`] に変換する
    ///
    /// 空文字列は「値がない」ものとして扱い、長さではなく `required` で落とす。
    pub fn into_draft(mut self) -> Result<TodoDraft, DomainError> {
        self.item = self.item.filter(|item| !item.is_empty());
        self.validate().map_err(ValidationFailure::from)?;

        let Some(item) = self.item else {
            return Err(ValidationFailure::Unknown.into());
        };

        Ok(TodoDraft {
            item,
            completed: self.completed,
        })
    }
}

/// 検証済みの Todo 内容
///
/// [`TodoPayload::into_draft`] を通してのみ作成できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    item:      String,
    completed: bool,
}

impl TodoDraft {
    /// 値を検証して作成する
    pub fn new(item: impl Into<String>, completed: bool) -> Result<Self, DomainError> {
        TodoPayload::new(item, completed).into_draft()
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// 保存済みの Todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:        TodoId,
    item:      String,
    completed: bool,
}

impl Todo {
    /// 採番済み ID と検証済み内容から作成する
    pub fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            item: draft.item,
            completed: draft.completed,
        }
    }

    /// データベースの行から復元する
    ///
    /// ストレージ側は長さ制約を強制しないため、ここでも検証しない。
    pub fn from_db(id: TodoId, item: String, completed: bool) -> Self {
        Self {
            id,
            item,
            completed,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// `completed` を反転した Todo を返す
    pub fn toggled(self) -> Self {
        Self {
            completed: !self.completed,
            ..self
        }
    }
}
