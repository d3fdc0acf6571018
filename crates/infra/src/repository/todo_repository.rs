//! # TodoRepository
//!
//! `todos` テーブルへのアクセスを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 = 1 文**: バッチや複数文のトランザクションは使わない
//! - **toggle / delete は単一の条件付き文**: `UPDATE .. RETURNING` /
//!   `DELETE .. RETURNING` で「存在すれば反転・削除し、その行を返す」を
//!   原子的に行う。取得と書き込みの間に別リクエストが割り込む余地はない
//! - **update の存在確認は影響行数**: 0 行なら `false` を返す

use async_trait::async_trait;
use sqlx::SqlitePool;
use todo_domain::todo::{Todo, TodoDraft, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番された ID を返す
    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, InfraError>;

    /// すべての Todo を ID 順で取得する（0 件なら空の Vec）
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// item と completed を無条件に上書きする
    ///
    /// 該当行が存在しなかった場合は `false` を返す。
    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<bool, InfraError>;

    /// completed を反転し、反転後の Todo を返す
    ///
    /// 該当行が存在しなかった場合は `None` を返す。
    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を物理削除し、削除直前の Todo を返す
    ///
    /// 該当行が存在しなかった場合は `None` を返す。
    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;
}

/// SQLite 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `todos` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:        i64,
    item:      String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(TodoId::from_i64(row.id), row.item, row.completed)
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO todos (item, completed)
            VALUES (?, ?)
            "#,
        )
        .bind(draft.item())
        .bind(draft.completed())
        .execute(&self.pool)
        .await?;

        Ok(TodoId::from_i64(result.last_insert_rowid()))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, item, completed
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, item, completed
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET item = ?, completed = ?
            WHERE id = ?
            "#,
        )
        .bind(draft.item())
        .bind(draft.completed())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET completed = NOT completed
            WHERE id = ?
            RETURNING id, item, completed
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            DELETE FROM todos
            WHERE id = ?
            RETURNING id, item, completed
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }
}
