//! # タスクレコード
//!
//! タスクリストの唯一の永続エンティティ。
//!
//! ## 不変条件
//!
//! - 識別子はデータベースのシーケンスで採番され、作成後は不変
//! - 識別子は 1 以上の正整数で、生存期間中ちょうど 1 件のレコードを指す
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use yarukoto_domain::todo::{Todo, TodoId};
//!
//! let todo = Todo::from_db(TodoId::new(1)?, "牛乳を買う".to_string(), false);
//!
//! assert_eq!(todo.id().as_i64(), 1);
//! assert_eq!(todo.name(), "牛乳を買う");
//! assert!(!todo.is_completed());
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// TodoId（タスク識別子）
// =========================================================================

/// タスクの一意識別子（値オブジェクト）
///
/// データベースの `BIGSERIAL` で採番される連番。
/// Newtype パターンで型安全性を確保。
///
/// # 不変条件
///
/// - 1 以上の正整数
#[derive(
   Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
   /// 指定した値から識別子を作成する
   ///
   /// # バリデーション
   ///
   /// - 0 以下は無効（シーケンスは 1 から始まる）
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(value: i64) -> Result<Self, DomainError> {
      if value < 1 {
         return Err(DomainError::Validation(
            "タスク ID は 1 以上である必要があります".to_string(),
         ));
      }
      Ok(Self(value))
   }

   /// DB から読み出した値をそのままラップする
   ///
   /// シーケンス採番済みの値に対して使用する。バリデーションは行わない。
   pub fn from_db(value: i64) -> Self {
      Self(value)
   }

   /// 内部の i64 値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

// =========================================================================
// Todo（タスクエンティティ）
// =========================================================================

/// 新規タスクの作成パラメータ
///
/// 識別子はデータベースが採番するため含まない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
   /// タスク名
   pub name:         String,
   /// 完了フラグ
   pub is_completed: bool,
}

/// タスクレコード
///
/// `id`・`name`・完了フラグの 3 フィールドのみを持つ。
/// 他エンティティとの関連は存在しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
   id:           TodoId,
   name:         String,
   is_completed: bool,
}

impl Todo {
   /// DB のレコードからエンティティを復元する
   pub fn from_db(id: TodoId, name: String, is_completed: bool) -> Self {
      Self {
         id,
         name,
         is_completed,
      }
   }

   /// 識別子を取得する
   pub fn id(&self) -> TodoId {
      self.id
   }

   /// タスク名を取得する
   pub fn name(&self) -> &str {
      &self.name
   }

   /// 完了フラグを取得する
   pub fn is_completed(&self) -> bool {
      self.is_completed
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   // ===== TodoId のテスト =====

   #[rstest]
   #[case(1)]
   #[case(42)]
   #[case(i64::MAX)]
   fn test_todo_idは1以上の値で作成できる(#[case] value: i64) {
      let id = TodoId::new(value).unwrap();
      assert_eq!(id.as_i64(), value);
   }

   #[rstest]
   #[case(0)]
   #[case(-1)]
   #[case(i64::MIN)]
   fn test_todo_idは0以下の値を拒否する(#[case] value: i64) {
      let result = TodoId::new(value);
      assert!(matches!(result, Err(DomainError::Validation(_))));
   }

   #[test]
   fn test_todo_idはdisplayで数値を出力する() {
      let id = TodoId::new(7).unwrap();
      assert_eq!(id.to_string(), "7");
   }

   #[test]
   fn test_todo_idはシリアライズで素の数値になる() {
      let id = TodoId::new(3).unwrap();
      let json = serde_json::to_value(id).unwrap();
      assert_eq!(json, serde_json::json!(3));
   }

   // ===== Todo のテスト =====

   #[test]
   fn test_from_dbで全フィールドが復元される() {
      let todo = Todo::from_db(TodoId::from_db(5), "掃除".to_string(), true);

      assert_eq!(todo.id().as_i64(), 5);
      assert_eq!(todo.name(), "掃除");
      assert!(todo.is_completed());
   }
}
