//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換可能
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 不変条件に反する値の生成 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 値が不変条件に違反している場合に使用する。
   /// 入力値検証の仕組みではなく、型の不変条件（例: ID は 1 以上）を守るためのもの。
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// エンティティが見つからない
   ///
   /// 指定された ID のエンティティが存在しない場合に使用する。
   ///
   /// # フィールド
   ///
   /// - `entity_type`: エンティティの種類（コンパイル時に決定される `&'static str`）
   /// - `id`: 検索に使用した識別子
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（"Todo" など）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}
