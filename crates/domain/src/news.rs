//! # ニュースカテゴリ
//!
//! 上流ニュース API が定義するカテゴリの閉じた集合。
//!
//! カテゴリ一覧エンドポイントはこの列挙型から固定の 7 要素を返す。
//! 中継エンドポイントの `category` クエリパラメータは素通しの文字列であり、
//! この型による検証は行わない（入力値検証は非対応機能）。

use serde::{Deserialize, Serialize};
use strum::{IntoStaticStr, VariantNames};

/// 上流ニュース API のカテゴリ
///
/// 一覧の順序は列挙型の定義順で固定される。
#[derive(
   Debug,
   Clone,
   Copy,
   PartialEq,
   Eq,
   Serialize,
   Deserialize,
   IntoStaticStr,
   VariantNames,
   strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NewsCategory {
   /// 総合
   General,
   /// ビジネス
   Business,
   /// テクノロジー
   Technology,
   /// スポーツ
   Sports,
   /// エンターテインメント
   Entertainment,
   /// 健康
   Health,
   /// 科学
   Science,
}

impl NewsCategory {
   /// 全カテゴリ名を定義順で返す
   pub fn all() -> &'static [&'static str] {
      Self::VARIANTS
   }
}
