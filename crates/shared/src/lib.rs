//! # Todo 共有ユーティリティ
//!
//! サービス全体で使用される共通の型とユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（HTTP レスポンスへの変換はサービスの責務）
//! - トレーシング初期化は `observability` feature の裏に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
