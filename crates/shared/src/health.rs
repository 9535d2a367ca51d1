//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントで使用されるレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`timestamp` は応答時刻（RFC 3339）、
/// `uptime` はプロセス起動からの経過秒数を示す。
///
/// ## 使用例
///
/// ```
/// use habitflow_shared::HealthResponse;
///
/// let response = HealthResponse {
///     status:    "healthy".to_string(),
///     timestamp: "2026-08-29T00:00:00+00:00".to_string(),
///     uptime:    12.5,
/// };
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
   /// 稼働状態（`"healthy"` または `"unhealthy"`）
   pub status:    String,
   /// 応答時刻（RFC 3339）
   pub timestamp: String,
   /// プロセス起動からの経過秒数
   pub uptime:    f64,
}
