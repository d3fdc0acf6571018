//! # ドメイン層エラー定義
//!
//! 入力値がドメインのルールに違反した場合のエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | ペイロードの検証失敗 |
//! | `MalformedIdentifier` | 400 Bad Request | パスの ID が 10 進整数でない |
//!
//! 「見つからない」はドメインの判断ではなく永続化層の結果なので、ここには含めない。

use thiserror::Error;

use crate::validation::ValidationFailure;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// ペイロードの検証エラー
    ///
    /// メッセージは違反したフィールドごとに 1 行。
    #[error("{0}")]
    Validation(ValidationFailure),

    /// ID の形式が不正
    ///
    /// 受け取った生の文字列を保持する（ログ用）。
    #[error("invalid id format")]
    MalformedIdentifier(String),
}

impl From<ValidationFailure> for DomainError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validation::FieldViolation;

    #[test]
    fn test_malformed_identifierのメッセージは固定文言() {
        let err = DomainError::MalformedIdentifier("abc".to_string());

        assert_eq!(err.to_string(), "invalid id format");
    }

    #[test]
    fn test_validationのメッセージは検証結果をそのまま表示する() {
        let failure = ValidationFailure::Fields(vec![FieldViolation::new("item", "min", "2")]);
        let err = DomainError::from(failure);

        assert_eq!(
            err.to_string(),
            "Field validation for 'item' failed: 'min' (condition: 2)"
        );
    }
}
