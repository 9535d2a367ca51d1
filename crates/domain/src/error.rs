//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//! | `AlreadyCompleted` | 400 Bad Request | 同一日の二重完了 |

use chrono::NaiveDate;
use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// サービス層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 入力値がビジネスルールに違反している場合に使用する。
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// エンティティが見つからない
   ///
   /// 指定された ID のエンティティがストアに存在しない場合に使用する。
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（"Habit" など）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },

   /// 同一日の二重完了
   ///
   /// `last_completed` が本日と同じカレンダー日付の場合に発生する。
   /// ストリークは変更されない。
   #[error("習慣は本日すでに完了済みです: {id}（{date}）")]
   AlreadyCompleted {
      /// 対象の習慣 ID
      id:   String,
      /// 完了済みの日付
      date: NaiveDate,
   },
}
