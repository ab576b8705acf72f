//! # ニュース API クライアント
//!
//! 上流のニュース API（<https://newsapi.org>）への通信を担当する。
//!
//! ## 設計方針
//!
//! - **リクエスト単位のヘッダ**: 共有クライアントのデフォルトヘッダは変更せず、
//!   毎回のリクエストビルダーにヘッダを設定する。並行リクエスト間で
//!   ヘッダが競合しない
//! - **秘匿情報のマスク**: 送信先 URL はキーを `***` に置換してからログに出力する
//! - **本文の素通し**: 上流のレスポンスは汎用 JSON として復号し、無変換で返す
//!
//! タイムアウト・リトライ・キャンセル伝搬は実装しない。
//! 上流の応答が止まるとそのリクエストの処理は応答まで待ち続ける。

use async_trait::async_trait;
use reqwest::{StatusCode, header};
use thiserror::Error;

/// 上流ニュース API のベース URL
const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// 上流が要求する識別用 User-Agent
const USER_AGENT_VALUE: &str = "Yarukoto/1.0 (https://github.com/yarukoto/yarukoto)";

/// ニュース API クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum NewsApiError {
   /// 上流が非成功ステータスを返した
   #[error("上流がステータス {status} を返しました")]
   Upstream {
      /// 上流のステータスコード
      status: StatusCode,
      /// 上流のレスポンス本文
      body:   String,
   },

   /// ネットワークエラー
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 予期しないエラー
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl From<reqwest::Error> for NewsApiError {
   fn from(err: reqwest::Error) -> Self {
      NewsApiError::Network(err.to_string())
   }
}

/// ニュース API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait NewsApiClient: Send + Sync {
   /// トップヘッドラインを取得する
   ///
   /// 上流の `GET /v2/top-headlines` を呼び出す。
   ///
   /// # 引数
   ///
   /// - `api_key`: サーバー側で保持する API キー
   /// - `category`: カテゴリ（素通し、検証しない）
   /// - `country`: 国コード（素通し、検証しない）
   ///
   /// # 戻り値
   ///
   /// 成功時は上流の本文を汎用 JSON として返す。
   /// 非成功ステータスは `NewsApiError::Upstream` として本文ごと返す。
   async fn top_headlines(
      &self,
      api_key: &str,
      category: &str,
      country: &str,
   ) -> Result<serde_json::Value, NewsApiError>;
}

/// 上流 URL を組み立てる
///
/// クエリ値は URL エンコードする。キーは呼び出し側の責任でマスクしてログに出す。
fn build_url(base_url: &str, category: &str, country: &str, api_key: &str) -> String {
   format!(
      "{}/v2/top-headlines?country={}&category={}&apiKey={}",
      base_url,
      urlencoding::encode(country),
      urlencoding::encode(category),
      api_key
   )
}

/// URL 中の API キーを `***` に置換する
fn redact_key(url: &str, api_key: &str) -> String {
   url.replace(api_key, "***")
}

/// ニュース API クライアント実装
#[derive(Clone)]
pub struct NewsApiClientImpl {
   base_url: String,
   client:   reqwest::Client,
}

impl NewsApiClientImpl {
   /// 既定のベース URL でクライアントを作成する
   pub fn new() -> Self {
      Self::with_base_url(DEFAULT_BASE_URL)
   }

   /// ベース URL を指定してクライアントを作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: 上流のベース URL（例: `https://newsapi.org`）
   pub fn with_base_url(base_url: &str) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         client:   reqwest::Client::new(),
      }
   }
}

impl Default for NewsApiClientImpl {
   fn default() -> Self {
      Self::new()
   }
}

#[async_trait]
impl NewsApiClient for NewsApiClientImpl {
   async fn top_headlines(
      &self,
      api_key: &str,
      category: &str,
      country: &str,
   ) -> Result<serde_json::Value, NewsApiError> {
      let url = build_url(&self.base_url, category, country, api_key);
      tracing::info!(
         "上流ニュース API を呼び出します: {}",
         redact_key(&url, api_key)
      );

      // ヘッダはリクエストビルダーに設定する。共有クライアントの状態は変更しない
      let response = self
         .client
         .get(&url)
         .header(header::USER_AGENT, USER_AGENT_VALUE)
         .header(header::ACCEPT, "application/json")
         .send()
         .await?;

      match response.status() {
         status if status.is_success() => {
            let body = response.text().await?;
            tracing::debug!(length = body.len(), "上流レスポンス本文: {}", body);

            serde_json::from_str::<serde_json::Value>(&body)
               .map_err(|e| NewsApiError::Unexpected(format!("上流本文の復号に失敗: {e}")))
         }
         status => {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "上流ニュース API がエラーを返しました: {}", body);
            Err(NewsApiError::Upstream { status, body })
         }
      }
   }
}
