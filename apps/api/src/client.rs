//! # 外部 API クライアント
//!
//! 上流ニュース API など外部サービスとの通信を担当する。

pub mod news_api;

pub use news_api::{NewsApiClient, NewsApiClientImpl, NewsApiError};
