//! # インメモリ習慣リポジトリ
//!
//! プロセスメモリ上の `Vec<Habit>` を `Mutex` で保護した実装。
//! 永続化は行わず、プロセス終了とともに状態は失われる。
//!
//! 各操作はロックの取得から解放までを 1 つの単位として実行されるため、
//! 個々の読み取り・変更はリクエスト境界で原子的になる。

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use habitflow_domain::habit::{Habit, HabitId};

use crate::error::InfraError;
use crate::repository::HabitRepository;

/// インメモリ習慣リポジトリ
///
/// `Clone` してもストアは共有される（`Arc` による共有所有）。
#[derive(Clone, Default)]
pub struct InMemoryHabitRepository {
   habits: Arc<Mutex<Vec<Habit>>>,
}

impl InMemoryHabitRepository {
   /// 空のストアを作成する
   pub fn new() -> Self {
      Self {
         habits: Arc::new(Mutex::new(Vec::new())),
      }
   }

   /// 初期データ入りのストアを作成する
   pub fn with_habits(habits: Vec<Habit>) -> Self {
      Self {
         habits: Arc::new(Mutex::new(habits)),
      }
   }

   /// ロックを取得する
   ///
   /// 汚染されたロックは `InfraError::lock_poisoned()` に変換する。
   fn lock(&self) -> Result<MutexGuard<'_, Vec<Habit>>, InfraError> {
      self.habits.lock().map_err(|_| InfraError::lock_poisoned())
   }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
   async fn find_all(&self) -> Result<Vec<Habit>, InfraError> {
      Ok(self.lock()?.clone())
   }

   async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, InfraError> {
      Ok(self.lock()?.iter().find(|h| h.id() == id).cloned())
   }

   async fn insert(&self, habit: &Habit) -> Result<(), InfraError> {
      self.lock()?.push(habit.clone());
      Ok(())
   }

   async fn update(&self, habit: &Habit) -> Result<(), InfraError> {
      let mut habits = self.lock()?;
      if let Some(pos) = habits.iter().position(|h| h.id() == habit.id()) {
         habits[pos] = habit.clone();
      }
      Ok(())
   }

   async fn remove(&self, id: HabitId) -> Result<bool, InfraError> {
      let mut habits = self.lock()?;
      match habits.iter().position(|h| h.id() == id) {
         Some(pos) => {
            habits.remove(pos);
            Ok(true)
         }
         None => Ok(false),
      }
   }
}
