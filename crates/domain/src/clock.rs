//! # Clock（時刻プロバイダ）
//!
//! ユースケース層での `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定時刻を注入可能にするための抽象化。
//!
//! 「カレンダー日」の基準タイムゾーンは UTC に固定する。
//! 日付文字列の比較ではなく [`Clock::today`] が返す `NaiveDate`
//! 同士を比較することで、日境界の判定を一意にする。

use chrono::{DateTime, NaiveDate, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;

   /// UTC 基準の本日のカレンダー日付を返す
   fn today(&self) -> NaiveDate {
      self.now().date_naive()
   }
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}
