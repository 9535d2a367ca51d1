//! # エラーレスポンス
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - ワイヤ形式は `{ "error": "<メッセージ>" }` の一段構造

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// すべてのエラー系レスポンスで統一された形式。
/// クライアントは `error` フィールドのメッセージをそのまま表示できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         error: message.into(),
      }
   }

   /// 500 Internal Server Error 用の固定メッセージ
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new("Something went wrong!")
   }
}
