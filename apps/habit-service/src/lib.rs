//! # Habit Service ライブラリ
//!
//! Habit Service のユースケースとハンドラを公開する。
//! 統合テストから内部モジュールへのアクセスを提供する。

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;
