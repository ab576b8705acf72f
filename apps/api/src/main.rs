//! # Yarukoto API サーバー
//!
//! タスクリストの CRUD API と、上流ニュース API への素通し中継を提供する。
//!
//! ## 役割
//!
//! - **タスク CRUD**: PostgreSQL に永続化されるタスクレコードの作成・取得・更新・削除
//! - **ニュース中継**: 上流ニュース API の呼び出しと本文の無変換リレー
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Frontend   │────▶│     API      │────▶│  PostgreSQL  │
//! └──────────────┘     │  port: 3000  │     └──────────────┘
//!                      └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │  News API    │
//!                      │  (upstream)  │
//!                      └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `FRONTEND_ORIGIN` | No | CORS で許可するオリジン |
//! | `NEWS_API_KEY` | No | 上流ニュース API のキー |
//! | `LOG_FORMAT` | No | ログ出力形式（`pretty` / `json`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p yarukoto-api
//!
//! # 本番環境
//! APP_PORT=3000 DATABASE_URL=postgres://... cargo run -p yarukoto-api --release
//! ```

mod config;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, http::HeaderValue, routing::get};
use config::AppConfig;
use tokio::net::TcpListener;
use tower_http::{
   cors::{Any, CorsLayer},
   trace::TraceLayer,
};
use yarukoto_api::{
   client::NewsApiClientImpl,
   handler::{
      NewsState,
      TodoState,
      create_todo,
      delete_todo,
      get_todo,
      health_check,
      hello,
      list_categories,
      list_todos,
      top_headlines,
      update_todo,
   },
};
use yarukoto_infra::{db, repository::PostgresTodoRepository};
use yarukoto_shared::observability::{TracingConfig, init_tracing};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   init_tracing(&TracingConfig::from_env("yarukoto-api"));

   // 設定読み込み
   let config = AppConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);
   if config.news_api_key.is_none() {
      tracing::warn!("ニュース API キーが未設定です。中継エンドポイントは 500 を返します");
   }

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // マイグレーション適用
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗しました");
   tracing::info!("マイグレーションを適用しました");

   // 依存コンポーネントを初期化
   let todo_state = Arc::new(TodoState {
      repository: PostgresTodoRepository::new(pool.clone()),
   });
   let news_state = Arc::new(NewsState {
      client:  NewsApiClientImpl::new(),
      api_key: config.news_api_key.clone(),
   });

   // CORS 設定（フロントエンドのオリジンのみ許可）
   let cors = CorsLayer::new()
      .allow_origin(
         config
            .frontend_origin
            .parse::<HeaderValue>()
            .expect("FRONTEND_ORIGIN が有効なオリジンではありません"),
      )
      .allow_methods(Any)
      .allow_headers(Any);

   // ルーター構築
   let app = Router::new()
      .route("/", get(hello))
      .route("/health", get(health_check))
      // タスク API
      .route(
         "/todos",
         get(list_todos::<PostgresTodoRepository>).post(create_todo::<PostgresTodoRepository>),
      )
      .route(
         "/todos/{id}",
         get(get_todo::<PostgresTodoRepository>)
            .put(update_todo::<PostgresTodoRepository>)
            .delete(delete_todo::<PostgresTodoRepository>),
      )
      .with_state(todo_state)
      // ニュース中継 API
      .route(
         "/api/news/top-headlines",
         get(top_headlines::<NewsApiClientImpl>),
      )
      .route("/api/news/categories", get(list_categories))
      .with_state(news_state)
      .layer(cors)
      .layer(TraceLayer::new_for_http());

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
