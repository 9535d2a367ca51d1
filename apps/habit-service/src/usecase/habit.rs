//! 習慣管理ユースケース
//!
//! 変更系の操作（追加・完了・削除）は `write_lock` で直列化する。
//! ストアの読み取りと書き込みは個別には原子的だが、ID の採番や
//! 同一日ガードは読み取り結果に基づいて書き込むため、判定から
//! 書き込みまでを 1 つのクリティカルセクションとして実行する。

use std::sync::Arc;

use habitflow_domain::{
   clock::Clock,
   habit::{Habit, HabitId, HabitName},
};
use habitflow_infra::HabitRepository;
use tokio::sync::Mutex;

use crate::error::ServiceError;

/// 習慣追加の入力
///
/// `name` はリクエストボディにフィールドが存在しない場合も表現するため
/// `Option` で受け取り、検証はユースケース側で行う。
pub struct AddHabitInput {
   pub name: Option<String>,
}

/// 習慣管理ユースケース
pub struct HabitUseCaseImpl {
   repository: Arc<dyn HabitRepository>,
   clock:      Arc<dyn Clock>,
   /// 変更系操作を直列化するロック
   ///
   /// 並行する追加が同じ最大 ID を観測して重複 ID を採番したり、
   /// 並行する完了が二重にガードを通過したりしないようにする。
   write_lock: Mutex<()>,
}

impl HabitUseCaseImpl {
   pub fn new(repository: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         repository,
         clock,
         write_lock: Mutex::new(()),
      }
   }

   /// すべての習慣を挿入順で取得する
   ///
   /// 読み取り専用で、状態を変更しない。
   pub async fn list_habits(&self) -> Result<Vec<Habit>, ServiceError> {
      Ok(self.repository.find_all().await?)
   }

   /// 習慣を追加する
   ///
   /// 1. 習慣名の存在を検証（空白のみは許容）
   /// 2. ID を採番（現在の最大 ID + 1、空なら 1）
   /// 3. ストリーク 0・未完了の状態で末尾に追加
   ///
   /// 採番から追加までは直列化されるため、並行する追加同士で ID が
   /// 重複することはない。
   pub async fn add_habit(&self, input: AddHabitInput) -> Result<Habit, ServiceError> {
      let raw_name = input
         .name
         .ok_or_else(|| ServiceError::Validation("Habit name is required".to_string()))?;
      let name = HabitName::new(raw_name)
         .map_err(|_| ServiceError::Validation("Habit name is required".to_string()))?;

      let _guard = self.write_lock.lock().await;

      let habits = self.repository.find_all().await?;
      let next_id = habits.iter().map(|h| h.id().as_i64()).max().unwrap_or(0) + 1;

      let habit = Habit::new(HabitId::from_i64(next_id), name);
      self.repository.insert(&habit).await?;

      Ok(habit)
   }

   /// 本日分の完了を記録する
   ///
   /// ストリークを 1 増やし、`last_completed` を本日（UTC）に設定する。
   /// 同じカレンダー日の二重完了はエラーとなり、状態は変化しない。
   /// ガードの判定から書き込みまでは直列化されるため、並行する完了が
   /// 同じ日のガードを二重に通過することはない。
   pub async fn complete_habit(&self, id: HabitId) -> Result<Habit, ServiceError> {
      let _guard = self.write_lock.lock().await;

      let habit = self
         .repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ServiceError::NotFound("Habit not found".to_string()))?;

      let today = self.clock.today();
      let habit = habit.complete(today).map_err(|_| {
         ServiceError::AlreadyCompleted("Habit already completed today".to_string())
      })?;

      self.repository.update(&habit).await?;

      Ok(habit)
   }

   /// 習慣を削除する
   pub async fn delete_habit(&self, id: HabitId) -> Result<(), ServiceError> {
      let _guard = self.write_lock.lock().await;

      let removed = self.repository.remove(id).await?;
      if !removed {
         return Err(ServiceError::NotFound("Habit not found".to_string()));
      }

      Ok(())
   }
}
