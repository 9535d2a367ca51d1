//! # リクエスト抽出
//!
//! axum 標準の extractor を包み、抽出失敗時のレスポンスを
//! サービス共通のエラー形式 `{ "error": "<メッセージ>" }` に揃える。
//! axum 標準の rejection はプレーンテキストを返すため、そのままでは
//! エラーレスポンスのワイヤ形式が崩れる。

use axum::{
   Json,
   extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::ServiceError;

/// JSON ボディ extractor
///
/// [`axum::Json`] と同じ動作で、デシリアライズ失敗などの rejection を
/// [`ServiceError`] に変換して返す。
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
   Json<T>: FromRequest<S, Rejection = JsonRejection>,
   S: Send + Sync,
{
   type Rejection = ServiceError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let Json(value) = Json::<T>::from_request(req, state).await?;
      Ok(Self(value))
   }
}
