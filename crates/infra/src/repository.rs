//! # リポジトリ
//!
//! エンティティの永続化を担当する。
//!
//! ## 設計方針
//!
//! - トレイトで抽象化し、ハンドラにはトレイトオブジェクトとして注入する
//!   （テストではスタブ・フェイクに差し替える）
//! - 実装は SQLite（sqlx）

pub mod todo_repository;

pub use todo_repository::{SqliteTodoRepository, TodoRepository};
