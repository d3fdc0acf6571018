//! # エラーレスポンス
//!
//! すべての 4xx / 5xx レスポンスで使用する `{"error": "<message>"}` 形式のボディ。
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - ステータスコードとの対応付けはサービス側の `IntoResponse` 実装が持つ

use serde::{Deserialize, Serialize};

/// 404 のメッセージ
pub const NOT_FOUND_MESSAGE: &str = "todo not found";

/// 不正な ID のメッセージ
pub const INVALID_ID_MESSAGE: &str = "invalid id format";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
