//! # 習慣リポジトリ
//!
//! 習慣ストアへのアクセスを抽象化するトレイトと、その実装を提供する。
//!
//! ## 設計方針
//!
//! - ユースケース層はこのトレイトにのみ依存し、具体的なストレージを知らない
//! - 返却順はすべて挿入順（一覧 API が挿入順を保証するため）

use async_trait::async_trait;
use habitflow_domain::habit::{Habit, HabitId};

use crate::error::InfraError;

pub mod in_memory;

pub use in_memory::InMemoryHabitRepository;

/// 習慣ストアへのアクセスを抽象化するトレイト
#[async_trait]
pub trait HabitRepository: Send + Sync {
   /// すべての習慣を挿入順で取得する
   async fn find_all(&self) -> Result<Vec<Habit>, InfraError>;

   /// ID で習慣を検索する
   async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, InfraError>;

   /// 習慣を末尾に追加する
   async fn insert(&self, habit: &Habit) -> Result<(), InfraError>;

   /// 同じ ID の習慣を置き換える
   ///
   /// 該当 ID が存在しない場合は何もしない。
   async fn update(&self, habit: &Habit) -> Result<(), InfraError>;

   /// ID で習慣を削除する
   ///
   /// 削除した場合は `true`、該当 ID が存在しなかった場合は `false` を返す。
   async fn remove(&self, id: HabitId) -> Result<bool, InfraError>;
}
