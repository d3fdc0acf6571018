//! # Todo インフラ層
//!
//! データベースとの通信を担当する。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール作成、スキーマ適用、疎通確認
//! - [`repository`] - Todo の永続化（`TodoRepository` トレイトと SQLite 実装）
//! - [`error`] - インフラ層エラー
//! - `fake` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 設計方針
//!
//! - ドメイン型（`Todo`, `TodoDraft`）で入出力し、行の形は外に出さない
//! - すべての操作は 1 つのパラメータ化された SQL 文で完結させる

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod fake;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
