//! # HabitFlow インフラ層
//!
//! 習慣ストアの実装を提供する。
//!
//! ## 設計方針
//!
//! - ストレージへのアクセスは [`repository::HabitRepository`]
//!   トレイトの背後に隠蔽する
//! - 現在の実装はインメモリ（[`repository::InMemoryHabitRepository`]）のみ。
//!   永続バックエンドへの差し替えは、このトレイトの別実装を追加するだけで
//!   呼び出し側の変更なしに行える

pub mod error;
pub mod repository;

pub use error::InfraError;
pub use repository::{HabitRepository, InMemoryHabitRepository};
