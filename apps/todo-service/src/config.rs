//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::env;

/// バインドアドレスの既定値
const DEFAULT_HOST: &str = "127.0.0.1";

/// ポート番号の既定値
const DEFAULT_PORT: u16 = 9191;

/// Todo Service サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `DATABASE_URL` が未設定の場合はエラーを返す。
    /// `TODO_PORT` が数値として読めない場合は既定値を使用する。
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host:         env::var("TODO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port:         parse_port(env::var("TODO_PORT").ok().as_deref()),
            database_url: env::var("DATABASE_URL")?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, default = DEFAULT_PORT, "TODO_PORT が不正なため既定値を使用します");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}
