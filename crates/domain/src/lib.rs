//! # Todo ドメイン層
//!
//! Todo サービスのドメインモデルと入力検証を定義する。
//!
//! ## モジュール構成
//!
//! - [`todo`] - Todo エンティティ、識別子、受信ペイロード
//! - [`validation`] - 構造化された検証結果（フィールド・ルール・パラメータ）
//! - [`error`] - ドメイン層エラー
//!
//! ## 設計方針
//!
//! - 永続化・HTTP の詳細に依存しない
//! - 検証ライブラリのエラー表現は [`validation::ValidationFailure`] に閉じ込め、
//!   上位層には漏らさない

pub mod error;
pub mod todo;
pub mod validation;

pub use error::DomainError;
