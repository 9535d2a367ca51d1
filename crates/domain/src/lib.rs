//! # HabitFlow ドメイン層
//!
//! 習慣トラッキングのビジネスロジックの中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`habit::Habit`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`habit::HabitId`],
//!   [`habit::HabitName`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストレージ、HTTP）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## 使用例
//!
//! ```rust
//! use habitflow_domain::habit::{Habit, HabitId, HabitName};
//!
//! let name = HabitName::new("Exercise").unwrap();
//! let habit = Habit::new(HabitId::from_i64(1), name);
//!
//! assert_eq!(habit.streak(), 0);
//! assert!(habit.last_completed().is_none());
//! ```

pub mod clock;
pub mod error;
pub mod habit;

pub use error::DomainError;
