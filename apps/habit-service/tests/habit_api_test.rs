//! # 習慣 API の統合テスト
//!
//! ルーター全体を組み立てて、HTTP レベルでの振る舞いを検証する。
//!
//! - ステータスコードとレスポンスボディのワイヤ形式
//! - ID 採番（max + 1）と挿入順の保証
//! - 同一日の二重完了ガード
//! - エラーレスポンスの形式 `{ "error": "<メッセージ>" }`

use std::sync::Arc;

use axum::{Router, body::Body};
use chrono::{DateTime, Utc};
use habitflow_domain::clock::{Clock, FixedClock};
use habitflow_infra::{HabitRepository, InMemoryHabitRepository};
use habitflow_service::{
   app::{build_app, seed_habits},
   config::ServiceConfig,
};
use http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

/// 2026-08-29T12:00:00Z（テスト内の「本日」）
const NOON: i64 = 1_788_004_800;

fn test_config() -> ServiceConfig {
   ServiceConfig {
      host:       "127.0.0.1".to_string(),
      port:       0,
      static_dir: "static".to_string(),
   }
}

/// シードデータ入りのテスト用ルーターを構築する
fn test_app_at(timestamp: i64) -> Router {
   let repository: Arc<dyn HabitRepository> =
      Arc::new(InMemoryHabitRepository::with_habits(seed_habits()));
   let clock: Arc<dyn Clock> =
      Arc::new(FixedClock::new(DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap()));
   build_app(&test_config(), repository, clock)
}

fn test_app() -> Router {
   test_app_at(NOON)
}

fn get(uri: &str) -> Request<Body> {
   Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
   Request::builder()
      .method("POST")
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
   Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
   Request::builder()
      .method("DELETE")
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   serde_json::from_slice(&bytes).unwrap()
}

/// テスト内の「本日」の ISO 日付文字列
fn today_string() -> String {
   DateTime::<Utc>::from_timestamp(NOON, 0)
      .unwrap()
      .date_naive()
      .to_string()
}

// GET /api/habits

#[tokio::test]
async fn test_一覧はシードデータを挿入順で返す() {
   let app = test_app();

   let response = app.oneshot(get("/api/habits")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   let body = body_json(response).await;
   assert_eq!(
      body,
      json!([
         { "id": 1, "name": "Exercise", "streak": 5, "lastCompleted": null },
         { "id": 2, "name": "Read", "streak": 3, "lastCompleted": null },
         { "id": 3, "name": "Meditate", "streak": 0, "lastCompleted": null }
      ])
   );
}

#[tokio::test]
async fn test_一覧は状態を変更しない() {
   let app = test_app();

   let first = body_json(app.clone().oneshot(get("/api/habits")).await.unwrap()).await;
   let second = body_json(app.oneshot(get("/api/habits")).await.unwrap()).await;

   assert_eq!(first, second);
}

// POST /api/habits

#[tokio::test]
async fn test_追加は201でmax足す1のidを割り当てる() {
   let app = test_app();

   let response = app
      .oneshot(post_json("/api/habits", json!({ "name": "Sleep" })))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::CREATED);
   let body = body_json(response).await;
   assert_eq!(
      body,
      json!({ "id": 4, "name": "Sleep", "streak": 0, "lastCompleted": null })
   );
}

#[tokio::test]
async fn test_追加された習慣は一覧の末尾に並ぶ() {
   let app = test_app();

   app.clone()
      .oneshot(post_json("/api/habits", json!({ "name": "Sleep" })))
      .await
      .unwrap();
   let body = body_json(app.oneshot(get("/api/habits")).await.unwrap()).await;

   let ids: Vec<i64> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|h| h["id"].as_i64().unwrap())
      .collect();
   assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_名前なしの追加は400を返す() {
   let app = test_app();

   let response = app
      .oneshot(post_json("/api/habits", json!({})))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   let body = body_json(response).await;
   assert_eq!(body, json!({ "error": "Habit name is required" }));
}

#[tokio::test]
async fn test_空文字列の名前の追加は400を返す() {
   let app = test_app();

   let response = app
      .oneshot(post_json("/api/habits", json!({ "name": "" })))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   let body = body_json(response).await;
   assert_eq!(body, json!({ "error": "Habit name is required" }));
}

#[tokio::test]
async fn test_不正なjsonボディでもエラー形式は維持される() {
   let app = test_app();

   let request = Request::builder()
      .method("POST")
      .uri("/api/habits")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
   let response = app.oneshot(request).await.unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   let body = body_json(response).await;
   assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_空白のみの名前の追加は許容される() {
   let app = test_app();

   let response = app
      .oneshot(post_json("/api/habits", json!({ "name": "   " })))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::CREATED);
}

// POST /api/habits/{id}/complete

#[tokio::test]
async fn test_完了は200でストリークが1増える() {
   let app = test_app();

   let response = app
      .oneshot(post("/api/habits/3/complete"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   let body = body_json(response).await;
   assert_eq!(
      body,
      json!({ "id": 3, "name": "Meditate", "streak": 1, "lastCompleted": today_string() })
   );
}

#[tokio::test]
async fn test_同じ日の二回目の完了は400でストリークは変化しない() {
   let app = test_app();

   let first = app
      .clone()
      .oneshot(post("/api/habits/3/complete"))
      .await
      .unwrap();
   assert_eq!(first.status(), StatusCode::OK);

   let second = app
      .clone()
      .oneshot(post("/api/habits/3/complete"))
      .await
      .unwrap();
   assert_eq!(second.status(), StatusCode::BAD_REQUEST);
   let body = body_json(second).await;
   assert_eq!(body, json!({ "error": "Habit already completed today" }));

   // ストリークは 1 のまま
   let list = body_json(app.oneshot(get("/api/habits")).await.unwrap()).await;
   assert_eq!(list[2]["streak"], 1);
}

#[tokio::test]
async fn test_未知のidの完了は404を返す() {
   let app = test_app();

   let response = app
      .oneshot(post("/api/habits/99/complete"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   let body = body_json(response).await;
   assert_eq!(body, json!({ "error": "Habit not found" }));
}

#[tokio::test]
async fn test_整数でないidの完了は404を返す() {
   // 整数として解釈できない ID はどの習慣にも一致しない
   let app = test_app();

   let response = app
      .oneshot(post("/api/habits/abc/complete"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   let body = body_json(response).await;
   assert_eq!(body, json!({ "error": "Habit not found" }));
}

// DELETE /api/habits/{id}

#[tokio::test]
async fn test_削除は204で本文なし() {
   let app = test_app();

   let response = app
      .clone()
      .oneshot(delete("/api/habits/2"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::NO_CONTENT);
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   assert!(bytes.is_empty());

   let list = body_json(app.oneshot(get("/api/habits")).await.unwrap()).await;
   let ids: Vec<i64> = list
      .as_array()
      .unwrap()
      .iter()
      .map(|h| h["id"].as_i64().unwrap())
      .collect();
   assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_未知のidの削除は404で一覧は変化しない() {
   let app = test_app();

   let response = app
      .clone()
      .oneshot(delete("/api/habits/99"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   let body = body_json(response).await;
   assert_eq!(body, json!({ "error": "Habit not found" }));

   let list = body_json(app.oneshot(get("/api/habits")).await.unwrap()).await;
   assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_最大idの削除後の追加は同じidを再利用する() {
   // max + 1 採番の帰結。シードの最大 ID 3 を削除すると次の追加は 3 になる
   let app = test_app();

   app.clone()
      .oneshot(delete("/api/habits/3"))
      .await
      .unwrap();
   let response = app
      .oneshot(post_json("/api/habits", json!({ "name": "Sleep" })))
      .await
      .unwrap();

   let body = body_json(response).await;
   assert_eq!(body["id"], 3);
}

// GET /health

#[tokio::test]
async fn test_ヘルスチェックは稼働状態を返す() {
   let app = test_app();

   let response = app.oneshot(get("/health")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   let body = body_json(response).await;
   assert_eq!(body["status"], "healthy");
   assert!(body["timestamp"].is_string());
   assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}
