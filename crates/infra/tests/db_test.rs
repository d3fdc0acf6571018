//! DB コネクション管理の統合テスト
//!
//! インメモリ SQLite を使用する。インメモリ DB は接続ごとに別物になるため、
//! `max_connections(1)` で同一接続を使い回す。

use todo_infra::db;

#[tokio::test]
async fn test_run_migrationsでtodosテーブルが作成される() {
    let pool = db::pool_options()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::run_migrations(&pool).await.unwrap();

    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.0, 0);
}

#[tokio::test]
async fn test_run_migrationsは2回呼んでも成功する() {
    let pool = db::pool_options()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::run_migrations(&pool).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
}

#[tokio::test]
async fn test_pingは接続できれば成功する() {
    let pool = db::create_pool("sqlite::memory:").await.unwrap();

    db::ping(&pool).await.unwrap();
}

#[tokio::test]
async fn test_pingは閉じたプールでエラーを返す() {
    let pool = db::create_pool("sqlite::memory:").await.unwrap();
    pool.close().await;

    assert!(db::ping(&pool).await.is_err());
}
