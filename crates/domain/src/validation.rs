//! # 構造化された検証結果
//!
//! 受信ペイロードの検証失敗を `(field, rule, param)` の組の集合として表す。
//!
//! ## 設計方針
//!
//! - 検証は `validator` クレートの derive で宣言するが、そのエラー型
//!   （`validator::ValidationErrors`）はこのモジュールで変換して外に出さない
//! - フィールド単位に分解できない失敗（JSON として読めないボディなど）は
//!   [`ValidationFailure::Unknown`] で表す
//!
//! ## 表示形式
//!
//! ```text
//! Field validation for 'item' failed: 'min' (condition: 2)
//! ```
//!
//! 違反が複数ある場合は改行で連結する。

use std::fmt;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// フィールド単位に分解できない検証失敗のメッセージ
pub const UNKNOWN_VALIDATION_ERROR: &str = "an unknown validation error occurred";

/// 1 つのフィールドの 1 つのルール違反
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// フィールド名（JSON 上の名前）
    pub field: String,
    /// 違反したルール（`required`, `min`, `max` など）
    pub rule:  String,
    /// ルールのパラメータ（`min` なら下限値）。パラメータを持たないルールは空文字列
    pub param: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule:  rule.into(),
            param: param.into(),
        }
    }

    /// `validator` のエラー 1 件を変換する
    ///
    /// `length` は下限・上限のどちらに違反したかで `min` / `max` に分ける。
    fn from_validator(field: &str, error: &ValidationError) -> Self {
        if error.code != "length" {
            let param = error
                .params
                .iter()
                .find(|(key, _)| **key != "value")
                .map(|(_, value)| param_to_string(value))
                .unwrap_or_default();
            return Self::new(field, error.code.to_string(), param);
        }

        let min = error.params.get("min").and_then(Value::as_u64);
        let max = error.params.get("max").and_then(Value::as_u64);
        let actual = error
            .params
            .get("value")
            .and_then(Value::as_str)
            .map(|value| value.chars().count() as u64);

        match (min, max, actual) {
            (Some(min), _, Some(len)) if len < min => Self::new(field, "min", min.to_string()),
            (_, Some(max), Some(_)) => Self::new(field, "max", max.to_string()),
            (Some(min), _, _) => Self::new(field, "min", min.to_string()),
            (None, Some(max), None) => Self::new(field, "max", max.to_string()),
            (None, None, _) => Self::new(field, "length", ""),
        }
    }
}

fn param_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field validation for '{}' failed: '{}' (condition: {})",
            self.field, self.rule, self.param
        )
    }
}

/// 検証失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// フィールド単位の違反（フィールド名順）
    Fields(Vec<FieldViolation>),
    /// フィールド単位に分解できない失敗
    Unknown,
}

impl ValidationFailure {
    /// 違反の一覧を返す。`Unknown` の場合は空
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Fields(violations) => violations,
            Self::Unknown => &[],
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(violations) if !violations.is_empty() => {
                let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
                f.write_str(&lines.join("\n"))
            }
            _ => f.write_str(UNKNOWN_VALIDATION_ERROR),
        }
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors
                    .iter()
                    .map(move |error| FieldViolation::from_validator(&field, error))
            })
            .collect();

        if violations.is_empty() {
            return Self::Unknown;
        }

        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Fields(violations)
    }
}
