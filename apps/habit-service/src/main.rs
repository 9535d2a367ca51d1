//! # Habit Service サーバー
//!
//! 習慣と完了ストリークを管理する HTTP サービス。
//!
//! ## 役割
//!
//! - **習慣 API**: 一覧・追加・完了記録・削除（`/api/habits`）
//! - **ヘルスチェック**: 稼働状態の確認（`/health`）
//! - **フロントエンド配信**: `/` で静的ページを返す
//!
//! ストレージはインメモリのみで、プロセス終了とともに状態は失われる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HABIT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `HABIT_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `HABIT_STATIC_DIR` | No | 静的ファイルディレクトリ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p habitflow-service
//!
//! # ポートを指定する場合
//! HABIT_PORT=8080 cargo run -p habitflow-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use habitflow_domain::clock::{Clock, SystemClock};
use habitflow_infra::{HabitRepository, InMemoryHabitRepository};
use habitflow_service::{
   app::{build_app, seed_habits},
   config::ServiceConfig,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Habit Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,habitflow=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ServiceConfig::from_env();

   tracing::info!(
      "Habit Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // 依存コンポーネントを初期化（インメモリストア + システム時計）
   let repository: Arc<dyn HabitRepository> =
      Arc::new(InMemoryHabitRepository::with_habits(seed_habits()));
   let clock: Arc<dyn Clock> = Arc::new(SystemClock);

   let app = build_app(&config, repository, clock);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Habit Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
