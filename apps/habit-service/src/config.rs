//! # Habit Service 設定
//!
//! 環境変数から Habit Service サーバーの設定を読み込む。

use std::env;

/// Habit Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
   /// バインドアドレス
   pub host:       String,
   /// ポート番号
   pub port:       u16,
   /// 静的ファイル配信ディレクトリ（`index.html` を含む）
   pub static_dir: String,
}

impl ServiceConfig {
   /// 環境変数から設定を読み込む
   ///
   /// すべての変数にデフォルト値があるため、未設定でも起動できる。
   ///
   /// | 変数名 | デフォルト | 説明 |
   /// |--------|-----------|------|
   /// | `HABIT_HOST` | `0.0.0.0` | バインドアドレス |
   /// | `HABIT_PORT` | `3000` | ポート番号 |
   /// | `HABIT_STATIC_DIR` | `apps/habit-service/static` | 静的ファイルディレクトリ |
   pub fn from_env() -> Self {
      Self {
         host:       env::var("HABIT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:       env::var("HABIT_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("HABIT_PORT は有効なポート番号である必要があります"),
         static_dir: env::var("HABIT_STATIC_DIR")
            .unwrap_or_else(|_| "apps/habit-service/static".to_string()),
      }
   }
}
