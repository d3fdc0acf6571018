//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! すべてのエラーレスポンスは `{"error": "<message>"}` 形式。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::{DomainError, validation::ValidationFailure};
use todo_infra::InfraError;
use todo_shared::{
    ErrorResponse,
    error_response::{INVALID_ID_MESSAGE, NOT_FOUND_MESSAGE},
};

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// ペイロードの検証失敗
    #[error("{0}")]
    Validation(ValidationFailure),

    /// パスの ID が整数として読めない
    #[error("{}", INVALID_ID_MESSAGE)]
    MalformedIdentifier,

    /// 該当 ID の Todo が存在しない
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// データベースエラー
    ///
    /// ドライバのメッセージをそのままクライアントに返す（内部ツール向け）。
    #[error("{0}")]
    Database(#[from] InfraError),
}

impl TodoServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedIdentifier => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for TodoServiceError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(failure) => Self::Validation(failure),
            DomainError::MalformedIdentifier(_) => Self::MalformedIdentifier,
        }
    }
}

impl From<ValidationFailure> for TodoServiceError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

impl IntoResponse for TodoServiceError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            tracing::error!(
                error = %e,
                span_trace = %e.span_trace(),
                "データベースエラー"
            );
        }

        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use todo_domain::validation::FieldViolation;

    use super::*;

    async fn body_of(error: TodoServiceError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_検証失敗は400で違反内容を返す() {
        let failure =
            ValidationFailure::Fields(vec![FieldViolation::new("item", "min", "2")]);

        let (status, body) = body_of(TodoServiceError::Validation(failure)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.error,
            "Field validation for 'item' failed: 'min' (condition: 2)"
        );
    }

    #[tokio::test]
    async fn test_分解できない検証失敗は定型文を返す() {
        let (status, body) = body_of(TodoServiceError::Validation(ValidationFailure::Unknown)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "an unknown validation error occurred");
    }

    #[tokio::test]
    async fn test_不正なidは400を返す() {
        let error: TodoServiceError = DomainError::MalformedIdentifier("abc".to_string()).into();

        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "invalid id format");
    }

    #[tokio::test]
    async fn test_not_foundは404を返す() {
        let (status, body) = body_of(TodoServiceError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "todo not found");
    }

    #[tokio::test]
    async fn test_データベースエラーは500でドライバのメッセージをそのまま返す() {
        let infra = InfraError::from(sqlx::Error::RowNotFound);
        let expected = infra.to_string();

        let (status, body) = body_of(TodoServiceError::Database(infra)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, expected);
    }
}
