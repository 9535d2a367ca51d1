//! # Habit Service エラー定義
//!
//! Habit Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## ワイヤ形式
//!
//! すべてのエラーは `{ "error": "<メッセージ>" }` 形式で返す。
//! 各バリアントはクライアントに返すメッセージをそのまま保持する。
//! 内部エラーのみメッセージを固定し、詳細はログに出力する。

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use habitflow_shared::ErrorResponse;
use thiserror::Error;

/// Habit Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
   /// 入力値の検証失敗
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 同一日の二重完了
   #[error("本日分は完了済みです: {0}")]
   AlreadyCompleted(String),

   /// リクエストボディの読み取り失敗
   #[error("リクエストボディの読み取りに失敗しました: {0}")]
   UnreadableBody(String),

   /// ストアエラー
   #[error("ストアエラー: {0}")]
   Repository(#[from] habitflow_infra::InfraError),
}

impl From<JsonRejection> for ServiceError {
   fn from(rejection: JsonRejection) -> Self {
      ServiceError::UnreadableBody(rejection.body_text())
   }
}

impl IntoResponse for ServiceError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
         ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
         ServiceError::AlreadyCompleted(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
         ServiceError::UnreadableBody(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
         ServiceError::Repository(e) => {
            tracing::error!("ストアエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
