//! # 習慣（Habit）
//!
//! 日々の完了ストリークを持つ習慣を管理する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Habit`] | 習慣 | 名前と完了ストリークを持つ唯一のエンティティ |
//! | [`HabitId`] | 習慣 ID | コレクション内で一意な整数 ID |
//! | [`HabitName`] | 習慣名 | 空文字列は不可（空白のみは許容） |
//!
//! ## 設計方針
//!
//! - **ストリークは増加のみ**: 完了 1 回につきちょうど 1 増加し、
//!   減少やリセットは行わない（「未達成日」のロジックは存在しない）
//! - **日境界は UTC カレンダー日**: `last_completed` は正規化された
//!   `NaiveDate` として保持し、同一日判定は日付の等価比較で行う
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::NaiveDate;
//! use habitflow_domain::habit::{Habit, HabitId, HabitName};
//!
//! let name = HabitName::new("Meditate").unwrap();
//! let habit = Habit::new(HabitId::from_i64(3), name);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
//! let habit = habit.complete(today).unwrap();
//!
//! assert_eq!(habit.streak(), 1);
//! assert_eq!(habit.last_completed(), Some(today));
//! ```

use chrono::NaiveDate;
use derive_more::Display;

use crate::error::DomainError;

/// 習慣 ID（一意識別子）
///
/// コレクション内で一意な整数。採番規則（max + 1）はストアの
/// スナップショットを参照するユースケース層が担う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct HabitId(i64);

impl HabitId {
   /// 既存の整数から習慣 ID を作成する
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// 習慣名（値オブジェクト）
///
/// # バリデーション
///
/// - 空文字列ではない
/// - 空白のみの文字列は**許容**する（trim は行わない）。
///   既存クライアントの挙動を維持するための意図的な判断。
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct HabitName(String);

impl HabitName {
   /// 習慣名を作成する
   ///
   /// 空文字列の場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      if value.is_empty() {
         return Err(DomainError::Validation(
            "習慣名は必須です".to_string(),
         ));
      }
      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 習慣エンティティ
///
/// 名前付きの習慣とその完了ストリークを表現する。
///
/// # 不変条件
///
/// - `streak` は完了成功 1 回につきちょうど 1 増加し、それ以外では変化しない
/// - `last_completed` が本日と同じ日付の場合、同日の再完了はできない
///   （翌日になると日付の不一致により暗黙的に解除される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
   id:             HabitId,
   name:           HabitName,
   streak:         u32,
   last_completed: Option<NaiveDate>,
}

impl Habit {
   /// 新しい習慣を作成する
   ///
   /// ストリークは 0、`last_completed` は未設定で開始する。
   pub fn new(id: HabitId, name: HabitName) -> Self {
      Self {
         id,
         name,
         streak: 0,
         last_completed: None,
      }
   }

   /// 既存のデータから習慣を復元する（シードデータ投入時など）
   pub fn from_parts(
      id: HabitId,
      name: HabitName,
      streak: u32,
      last_completed: Option<NaiveDate>,
   ) -> Self {
      Self {
         id,
         name,
         streak,
         last_completed,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> HabitId {
      self.id
   }

   pub fn name(&self) -> &HabitName {
      &self.name
   }

   pub fn streak(&self) -> u32 {
      self.streak
   }

   pub fn last_completed(&self) -> Option<NaiveDate> {
      self.last_completed
   }

   // 不変更新メソッド

   /// 本日分の完了を記録する
   ///
   /// ストリークを 1 増やし、`last_completed` を `today` に設定する。
   ///
   /// # エラー
   ///
   /// `last_completed` がすでに `today` と一致する場合は
   /// [`DomainError::AlreadyCompleted`] を返し、状態は変化しない。
   pub fn complete(self, today: NaiveDate) -> Result<Self, DomainError> {
      if self.last_completed == Some(today) {
         return Err(DomainError::AlreadyCompleted {
            id:   self.id.to_string(),
            date: today,
         });
      }

      Ok(Self {
         streak: self.streak + 1,
         last_completed: Some(today),
         ..self
      })
   }
}
