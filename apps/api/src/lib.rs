//! # API サービスライブラリ
//!
//! ハンドラ・外部 API クライアント・エラー型を公開する。
//! テストから内部モジュールへアクセスできるようにするためのライブラリクレート。
//!
//! ## モジュール構成
//!
//! - [`client`] - 上流ニュース API クライアント
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ

pub mod client;
pub mod error;
pub mod handler;
