//! # データベース接続管理
//!
//! 接続プールの作成、スキーマ適用、疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 起動時に一度だけ作成し、リポジトリに明示的に渡す
//!   （グローバルな接続ハンドルは持たない）
//! - **文単位の接続取得**: 各 SQL 文の実行時にプールから借り、完了時に返す
//! - **SQLite**: sqlx の SQLite ドライバを使用する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::db;
//!
//! async fn example() -> Result<(), todo_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://todos.db?mode=rwc").await?;
//!     db::run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::error::InfraError;

/// 接続プールの既定オプションを返す
///
/// テストでは `max_connections(1)` などを重ねて使用する。
pub fn pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
}

/// 接続プールを作成する
///
/// # 引数
///
/// * `database_url` - sqlx の SQLite 接続 URL
///   - 例: `sqlite://todos.db?mode=rwc`（ファイルがなければ作成）
///   - 例: `sqlite::memory:`
#[tracing::instrument(skip_all)]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, InfraError> {
    let pool = pool_options().connect(database_url).await?;
    Ok(pool)
}

/// `migrations/` のスキーマを適用する
///
/// 適用済みのものはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// データベースへの疎通を `SELECT 1` で確認する
pub async fn ping(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
