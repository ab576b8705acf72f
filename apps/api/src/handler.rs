//! # HTTP リクエストハンドラ
//!
//! ルーターから呼び出されるハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - **リポジトリ・クライアントはジェネリクス**: ハンドラはトレイト境界のみに依存し、
//!   テストではスタブ実装を注入する
//! - **DTO の分離**: ドメインエンティティをそのままシリアライズせず、
//!   ワイヤ形式（camelCase の `isCompleted`）は DTO が担う

pub mod health;
pub mod news;
pub mod root;
pub mod todo;

pub use health::health_check;
pub use news::{NewsState, list_categories, top_headlines};
pub use root::hello;
pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
