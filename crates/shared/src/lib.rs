//! # HabitFlow 共有ユーティリティ
//!
//! このクレートは、HabitFlow
//! プロジェクト全体で使用される共通のワイヤ型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ型のみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）

pub mod error_response;
pub mod health;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
