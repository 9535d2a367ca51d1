//! # ヘルスチェックハンドラ
//!
//! Habit Service の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "timestamp": "2026-08-29T12:00:00+00:00",
//!   "uptime": 12.5
//! }
//! ```

use std::{sync::Arc, time::Instant};

use axum::{Json, extract::State};
use chrono::Utc;
use habitflow_shared::HealthResponse;

/// ヘルスチェック API の共有状態
pub struct HealthState {
   /// プロセス起動時刻（uptime の起点）
   pub started_at: Instant,
}

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
   Json(HealthResponse {
      status:    "healthy".to_string(),
      timestamp: Utc::now().to_rfc3339(),
      uptime:    state.started_at.elapsed().as_secs_f64(),
   })
}
