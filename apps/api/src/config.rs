//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。これにより:
//!
//! - 環境ごとの設定を変更せずにデプロイ可能
//! - シークレット（ニュース API キーなど）をコードに含めない
//! - コンテナ環境での設定注入が容易
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `APP_HOST` | No | `0.0.0.0` | サーバーのバインドアドレス |
//! | `APP_PORT` | No | `3000` | サーバーのポート番号 |
//! | `DATABASE_URL` | **Yes** | - | PostgreSQL 接続 URL |
//! | `FRONTEND_ORIGIN` | No | `http://localhost:5207` | CORS で許可するオリジン |
//! | `NEWS_API_KEY` | No | - | 上流ニュース API のキー |
//! | `NEWSAPI__APIKEY` | No | - | 同上（旧綴り、フォールバック） |

use std::env;

/// アプリケーション全体の設定
///
/// アプリケーション起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone)]
pub struct AppConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host:            String,
   /// ポート番号（例: `3000`, `8080`）
   pub port:            u16,
   /// PostgreSQL 接続 URL
   pub database_url:    String,
   /// CORS で許可するフロントエンドのオリジン
   pub frontend_origin: String,
   /// 上流ニュース API のキー
   ///
   /// 未設定でも起動は継続し、中継エンドポイントが固定の 500 を返す。
   pub news_api_key:    Option<String>,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 必須の環境変数が設定されていない場合はエラーを返す。
   /// オプションの環境変数はデフォルト値を使用する。
   ///
   /// ニュース API キーは歴史的経緯から 2 通りの綴りを順に探す:
   /// `NEWS_API_KEY` → `NEWSAPI__APIKEY`。
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host:            env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:            env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("APP_PORT は有効なポート番号である必要があります"),
         database_url:    env::var("DATABASE_URL")?,
         frontend_origin: env::var("FRONTEND_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5207".to_string()),
         news_api_key:    env::var("NEWS_API_KEY")
            .ok()
            .or_else(|| env::var("NEWSAPI__APIKEY").ok()),
      })
   }
}
