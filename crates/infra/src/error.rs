//! # インフラ層エラー定義
//!
//! ストアへのアクセスで発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（LockPoisoned, Unexpected）
//!
//! convenience constructor でエラーを生成すると、その時点のスパン情報が
//! 自動的にキャプチャされる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// サービス層でこのエラー種別に応じて適切な HTTP レスポンスに変換する。
/// インメモリストアでは失敗要因が少なく、いずれも 500 に対応する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// ロック汚染
   ///
   /// 別スレッドがロック保持中にパニックした場合に発生する。
   #[error("習慣ストアのロックが汚染されています")]
   LockPoisoned,

   /// 予期しないエラー
   ///
   /// 上記に分類できない予期しないエラー。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   // ===== Convenience constructors =====

   /// ロック汚染エラーを生成する
   pub fn lock_poisoned() -> Self {
      Self {
         kind:       InfraErrorKind::LockPoisoned,
         span_trace: SpanTrace::capture(),
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

#[cfg(test)]
mod tests {
   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   /// テスト用に ErrorLayer 付き subscriber を設定する
   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   #[test]
   fn test_lock_poisonedでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_store");
         let _enter = span.enter();

         let err = InfraError::lock_poisoned();

         assert!(matches!(err.kind(), InfraErrorKind::LockPoisoned));
         let trace_str = format!("{}", err.span_trace());
         assert!(
            trace_str.contains("test_store"),
            "SpanTrace がスパン名を含むこと: {trace_str}",
         );
      });
   }

   #[test]
   fn test_unexpectedでメッセージが保持される() {
      with_error_layer(|| {
         let err = InfraError::unexpected("想定外の状態");

         assert!(matches!(
            err.kind(),
            InfraErrorKind::Unexpected(msg) if msg == "想定外の状態"
         ));
      });
   }

   #[test]
   fn test_displayがinfra_error_kindのメッセージを出力する() {
      let err = InfraError::lock_poisoned();

      assert_eq!(
         format!("{err}"),
         "習慣ストアのロックが汚染されています"
      );
   }
}
