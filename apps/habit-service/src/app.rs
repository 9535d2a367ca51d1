//! # アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::{sync::Arc, time::Instant};

use axum::{
   Router,
   routing::{delete, get, post},
};
use habitflow_domain::{
   clock::Clock,
   habit::{Habit, HabitId, HabitName},
};
use habitflow_infra::HabitRepository;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
   config::ServiceConfig,
   handler::{
      HabitState,
      HealthState,
      complete_habit,
      create_habit,
      delete_habit,
      health_check,
      list_habits,
   },
   usecase::HabitUseCaseImpl,
};

/// 起動時に投入する初期データ
///
/// プロセスごとに毎回同じ 3 件から開始する（永続化は行わない）。
pub fn seed_habits() -> Vec<Habit> {
   let habit = |id: i64, name: &str, streak: u32| {
      Habit::from_parts(
         HabitId::from_i64(id),
         HabitName::new(name).expect("既知の習慣名は空ではない"),
         streak,
         None,
      )
   };

   vec![
      habit(1, "Exercise", 5),
      habit(2, "Read", 3),
      habit(3, "Meditate", 0),
   ]
}

/// DI コンテナの構築とルーター定義を行う
///
/// 初期化済みのストアと Clock を受け取り、ユースケース → State → Router の
/// 順に組み立てる。`/` と静的アセットは `static_dir` から配信する。
pub fn build_app(
   config: &ServiceConfig,
   repository: Arc<dyn HabitRepository>,
   clock: Arc<dyn Clock>,
) -> Router {
   let usecase = HabitUseCaseImpl::new(repository, clock);
   let habit_state = Arc::new(HabitState { usecase });
   let health_state = Arc::new(HealthState {
      started_at: Instant::now(),
   });

   Router::new()
      .route("/health", get(health_check))
      .with_state(health_state)
      // 習慣 API
      .route("/api/habits", get(list_habits).post(create_habit))
      .route("/api/habits/{id}/complete", post(complete_habit))
      .route("/api/habits/{id}", delete(delete_habit))
      .with_state(habit_state)
      // フロントエンドページ（`/` → index.html）と静的アセット
      .fallback_service(ServeDir::new(&config.static_dir))
      .layer(TraceLayer::new_for_http())
}
