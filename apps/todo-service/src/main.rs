//! # Todo Service サーバー
//!
//! 単一の `todos` テーブルに対する CRUD を HTTP で提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `9191`） |
//! | `DATABASE_URL` | **Yes** | SQLite 接続 URL（例: `sqlite://todos.db?mode=rwc`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todo=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=sqlite://todos.db?mode=rwc cargo run -p todo-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todo_infra::{db, repository::SqliteTodoRepository};
use todo_service::{
    app_builder::{build_health_router, build_todo_router},
    config::TodoConfig,
    handler::{ReadinessState, TodoState},
};
use todo_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let _tracing_guard = init_tracing("todo-service", LogFormat::from_env());

    // 設定読み込み
    let config = TodoConfig::from_env().context("DATABASE_URL が設定されていません")?;

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    // 依存コンポーネントを初期化
    let todo_state = Arc::new(TodoState {
        repository: Arc::new(SqliteTodoRepository::new(pool.clone())),
    });
    let readiness_state = Arc::new(ReadinessState { pool });

    let app = build_todo_router(todo_state)
        .merge(build_health_router(readiness_state))
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
