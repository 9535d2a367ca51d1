//! # ユースケース層
//!
//! ハンドラから呼び出されるビジネスロジックのオーケストレーションを定義する。
//!
//! ## 設計方針
//!
//! - ハンドラは薄く保ち、検証・採番・状態遷移はユースケースに集約
//! - ストアへのアクセスは [`habitflow_infra::HabitRepository`] 経由のみ

pub mod habit;

pub use habit::{AddHabitInput, HabitUseCaseImpl};
