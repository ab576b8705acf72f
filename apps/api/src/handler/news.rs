//! # ニュース中継ハンドラ
//!
//! 上流ニュース API への素通し中継エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! - `GET /api/news/top-headlines?category=&country=` - ヘッドラインの中継
//! - `GET /api/news/categories` - 固定のカテゴリ一覧（外部呼び出しなし）
//!
//! ## 中継の契約
//!
//! 上流の成功レスポンスは無変換で返す。非成功ステータスは
//! そのまま伝搬し、本文をエラーエンベロープに包んで返す。
//! キャッシュ・リトライ・変換は行わない。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Query, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Deserialize;
use yarukoto_domain::news::NewsCategory;

use crate::{
   client::{NewsApiClient, NewsApiError},
   error::ApiError,
};

/// ニュースハンドラの State
pub struct NewsState<C> {
   /// 上流 API クライアント
   pub client:  C,
   /// サーバー側で保持する API キー
   ///
   /// 未設定の場合、中継エンドポイントは固定の 500 を返す。
   pub api_key: Option<String>,
}

/// ヘッドライン取得のクエリパラメータ
///
/// 省略時は上流のデフォルトに合わせる（category=general, country=us）。
#[derive(Debug, Deserialize)]
pub struct HeadlinesQuery {
   #[serde(default = "default_category")]
   pub category: String,
   #[serde(default = "default_country")]
   pub country:  String,
}

fn default_category() -> String {
   "general".to_string()
}

fn default_country() -> String {
   "us".to_string()
}

/// トップヘッドラインを中継する
///
/// ## エンドポイント
/// GET /api/news/top-headlines?category=&country=
///
/// 上流の本文を汎用 JSON として無変換で返す。
pub async fn top_headlines<C>(
   State(state): State<Arc<NewsState<C>>>,
   Query(query): Query<HeadlinesQuery>,
) -> Result<Response, ApiError>
where
   C: NewsApiClient,
{
   let Some(api_key) = state.api_key.as_deref() else {
      return Err(ApiError::MissingNewsKey);
   };

   let headlines = state
      .client
      .top_headlines(api_key, &query.category, &query.country)
      .await
      .map_err(|e| match e {
         NewsApiError::Upstream { status, body } => ApiError::Upstream {
            status,
            details: body,
         },
         NewsApiError::Network(msg) | NewsApiError::Unexpected(msg) => {
            ApiError::UpstreamTransport(msg)
         }
      })?;

   Ok((StatusCode::OK, Json(headlines)).into_response())
}

/// カテゴリ一覧を返す
///
/// ## エンドポイント
/// GET /api/news/categories
///
/// 固定の 7 カテゴリを返す。外部呼び出しは行わない。
pub async fn list_categories() -> Json<&'static [&'static str]> {
   Json(NewsCategory::all())
}
