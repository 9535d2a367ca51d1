//! # 習慣ハンドラ
//!
//! 習慣の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/habits` - 習慣一覧（挿入順）
//! - `POST /api/habits` - 習慣追加
//! - `POST /api/habits/{id}/complete` - 本日分の完了を記録
//! - `DELETE /api/habits/{id}` - 習慣削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use habitflow_domain::habit::{Habit, HabitId};
use serde::{Deserialize, Serialize};

use crate::{
   error::ServiceError,
   extract::AppJson,
   usecase::{AddHabitInput, HabitUseCaseImpl},
};

/// 習慣 API の共有状態
pub struct HabitState {
   pub usecase: HabitUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 習慣 DTO
///
/// `lastCompleted` は ISO 形式（`YYYY-MM-DD`）の文字列、未完了なら null。
#[derive(Debug, Serialize)]
pub struct HabitDto {
   pub id:             i64,
   pub name:           String,
   pub streak:         u32,
   #[serde(rename = "lastCompleted")]
   pub last_completed: Option<String>,
}

impl HabitDto {
   fn from_entity(habit: &Habit) -> Self {
      Self {
         id:             habit.id().as_i64(),
         name:           habit.name().to_string(),
         streak:         habit.streak(),
         last_completed: habit.last_completed().map(|d| d.to_string()),
      }
   }
}

/// 習慣追加リクエスト
///
/// `name` フィールドの欠落を 400 として扱うため `Option` で受ける
/// （デシリアライズ拒否にしない）。
#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
   pub name: Option<String>,
}

/// パス ID を習慣 ID に変換する
///
/// 整数として解釈できない ID はどの習慣にも一致しないため 404 を返す。
fn parse_habit_id(raw: &str) -> Result<HabitId, ServiceError> {
   raw.parse::<i64>()
      .map(HabitId::from_i64)
      .map_err(|_| ServiceError::NotFound("Habit not found".to_string()))
}

// --- ハンドラ ---

/// GET /api/habits
///
/// すべての習慣を挿入順で返す。
pub async fn list_habits(
   State(state): State<Arc<HabitState>>,
) -> Result<impl IntoResponse, ServiceError> {
   let habits = state.usecase.list_habits().await?;

   let items: Vec<HabitDto> = habits.iter().map(HabitDto::from_entity).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// POST /api/habits
///
/// 習慣を追加する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された習慣
/// - `400 Bad Request`: 名前が欠落または空、あるいはボディが JSON として不正
pub async fn create_habit(
   State(state): State<Arc<HabitState>>,
   AppJson(req): AppJson<CreateHabitRequest>,
) -> Result<impl IntoResponse, ServiceError> {
   let habit = state
      .usecase
      .add_habit(AddHabitInput { name: req.name })
      .await?;

   Ok((StatusCode::CREATED, Json(HabitDto::from_entity(&habit))))
}

/// POST /api/habits/{id}/complete
///
/// 本日分の完了を記録する。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の習慣
/// - `400 Bad Request`: 本日すでに完了済み
/// - `404 Not Found`: 習慣が見つからない
pub async fn complete_habit(
   State(state): State<Arc<HabitState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
   let id = parse_habit_id(&id)?;

   let habit = state.usecase.complete_habit(id).await?;

   Ok((StatusCode::OK, Json(HabitDto::from_entity(&habit))))
}

/// DELETE /api/habits/{id}
///
/// 習慣を削除する。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: 習慣が見つからない
pub async fn delete_habit(
   State(state): State<Arc<HabitState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
   let id = parse_habit_id(&id)?;

   state.usecase.delete_habit(id).await?;

   Ok(StatusCode::NO_CONTENT)
}
