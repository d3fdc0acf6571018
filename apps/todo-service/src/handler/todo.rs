//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /todos` - 一覧取得（0 件なら空配列）
//! - `POST /todos` - 作成（201）
//! - `GET /todos/{id}` - 取得
//! - `PATCH /todos/{id}` - completed の反転
//! - `PUT /todos/{id}` - item / completed の上書き
//! - `DELETE /todos/{id}` - 削除（削除直前の内容を返す）
//!
//! ## 処理の流れ
//!
//! ```text
//! パスの id をパース ──▶ ボディを検証（POST / PUT のみ）──▶ リポジトリ呼び出し ──▶ レスポンス
//!        │                       │                                  │
//!        ▼                       ▼                                  ▼
//!   400 invalid id          400 検証エラー                   404 / 500
//! ```
//!
//! パスの id は `Path<String>` で受け取り、ハンドラ内で [`TodoId::parse`] する。
//! パースに失敗したリクエストはリポジトリに到達しない。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todo_domain::{
    todo::{Todo, TodoId, TodoPayload},
    validation::ValidationFailure,
};
use todo_infra::repository::TodoRepository;

use crate::error::TodoServiceError;

/// Todo API の共有状態
pub struct TodoState {
    pub repository: Arc<dyn TodoRepository>,
}

/// Todo レスポンス DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    pub id:        i64,
    pub item:      String,
    pub completed: bool,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id:        todo.id().as_i64(),
            item:      todo.item().to_string(),
            completed: todo.completed(),
        }
    }
}

/// ボディを検証前のペイロードにデコードする
///
/// Content-Type は見ない。JSON として読めない、型が合わないなど
/// フィールド単位に分解できない失敗は [`ValidationFailure::Unknown`] になる。
fn payload_from(body: &Bytes) -> Result<TodoPayload, TodoServiceError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "リクエストボディを読み取れませんでした");
        ValidationFailure::Unknown.into()
    })
}

/// GET /todos
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoServiceError> {
    let todos = state.repository.find_all().await?;

    let response: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok(Json(response))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    body: Bytes,
) -> Result<impl IntoResponse, TodoServiceError> {
    let draft = payload_from(&body)?.into_draft()?;

    let id = state.repository.insert(&draft).await?;
    tracing::info!(%id, "Todo を作成しました");

    Ok((
        StatusCode::CREATED,
        Json(TodoDto::from(Todo::from_draft(id, draft))),
    ))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, TodoServiceError> {
    let id = TodoId::parse(&raw_id)?;

    let todo = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(TodoServiceError::NotFound)?;

    Ok(Json(TodoDto::from(todo)))
}

/// PATCH /todos/{id}
///
/// completed を反転し、反転後の内容を返す。ボディは読まない。
pub async fn toggle_todo(
    State(state): State<Arc<TodoState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, TodoServiceError> {
    let id = TodoId::parse(&raw_id)?;

    let todo = state
        .repository
        .toggle_completed(id)
        .await?
        .ok_or(TodoServiceError::NotFound)?;
    tracing::info!(%id, completed = todo.completed(), "Todo を反転しました");

    Ok(Json(TodoDto::from(todo)))
}

/// PUT /todos/{id}
///
/// item と completed を両方上書きする（部分更新なし）。
/// 存在確認は更新の影響行数で行い、再取得はしない。
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, TodoServiceError> {
    let id = TodoId::parse(&raw_id)?;
    let draft = payload_from(&body)?.into_draft()?;

    if !state.repository.update(id, &draft).await? {
        return Err(TodoServiceError::NotFound);
    }
    tracing::info!(%id, "Todo を更新しました");

    Ok(Json(TodoDto::from(Todo::from_draft(id, draft))))
}

/// DELETE /todos/{id}
///
/// 削除直前の内容を返す。
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, TodoServiceError> {
    let id = TodoId::parse(&raw_id)?;

    let todo = state
        .repository
        .delete(id)
        .await?
        .ok_or(TodoServiceError::NotFound)?;
    tracing::info!(%id, "Todo を削除しました");

    Ok(Json(TodoDto::from(todo)))
}
