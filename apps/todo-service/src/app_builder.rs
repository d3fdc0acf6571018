//! # ルーター構築
//!
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! ルーティングはここで組み立てる。統合テストも同じ関数を使う。

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::handler::{
    ReadinessState,
    TodoState,
    create_todo,
    delete_todo,
    get_todo,
    health_check,
    list_todos,
    readiness_check,
    toggle_todo,
    update_todo,
};

/// Todo API のルーターを構築する
///
/// | Method | Path |
/// |--------|------|
/// | GET / POST | `/todos` |
/// | GET / PATCH / PUT / DELETE | `/todos/{id}` |
pub fn build_todo_router(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .patch(toggle_todo)
                .put(update_todo)
                .delete(delete_todo),
        )
        .with_state(state)
}

/// ヘルスチェックのルーターを構築する
pub fn build_health_router(state: Arc<ReadinessState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(state)
}
