//! # Todo Service ライブラリ
//!
//! ハンドラ・エラー・ルーター構築を公開する。
//! `main.rs` と統合テストの両方から同じルーターを使用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
