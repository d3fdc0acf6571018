//! # HTTP ハンドラ
//!
//! - `health`: ヘルスチェック（liveness / readiness）
//! - `todo`: Todo の CRUD

pub mod health;
pub mod todo;

pub use health::{ReadinessState, health_check, readiness_check};
pub use todo::{
    TodoDto,
    TodoState,
    create_todo,
    delete_todo,
    get_todo,
    list_todos,
    toggle_todo,
    update_todo,
};
