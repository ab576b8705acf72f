//! # API エラー定義
//!
//! API 層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの階層
//!
//! ```text
//! インフラ層エラー (InfraError) / クライアントエラー (NewsApiError)
//!        ↓ 変換
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + JSON)
//! ```
//!
//! ## レスポンス形式
//!
//! タスク API は RFC 9457 Problem Details（[`ErrorResponse`]）を返す。
//! ニュース中継 API は上流互換のエンベロープ
//! （`{error}` / `{error, details}` / `{error, message}`）を返す。
//!
//! 内部エラーの詳細はログにのみ出力し、クライアントには固定メッセージを返す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use yarukoto_infra::InfraError;
use yarukoto_shared::ErrorResponse;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),

   /// ニュース API キーが未設定
   #[error("NewsAPI キーが設定されていません")]
   MissingNewsKey,

   /// 上流ニュース API が非成功ステータスを返した
   ///
   /// ステータスコードをそのまま伝搬し、上流の本文をエンベロープに包んで返す。
   #[error("上流ニュース API がエラーを返しました: {status}")]
   Upstream {
      /// 上流のステータスコード
      status:  StatusCode,
      /// 上流のレスポンス本文
      details: String,
   },

   /// 上流ニュース API への通信に失敗した
   ///
   /// 例外メッセージはログにのみ出力し、クライアントには固定文言を返す。
   #[error("上流ニュース API への通信に失敗しました: {0}")]
   UpstreamTransport(String),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::NotFound(msg) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(msg))).into_response()
         }
         ApiError::Database(e) => {
            tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(ErrorResponse::internal_error()),
            )
               .into_response()
         }
         ApiError::MissingNewsKey => {
            tracing::error!("NewsAPI キーが設定されていません");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(json!({ "error": "NewsAPI key not configured" })),
            )
               .into_response()
         }
         ApiError::Upstream { status, details } => (
            status,
            Json(json!({
               "error": "News API request failed",
               "details": details,
            })),
         )
            .into_response(),
         ApiError::UpstreamTransport(msg) => {
            tracing::error!(error = %msg, "上流ニュース API の呼び出しに失敗しました");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(json!({
                  "error": "Internal server error",
                  "message": "upstream request failed",
               })),
            )
               .into_response()
         }
      }
   }
}
