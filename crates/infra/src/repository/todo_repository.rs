//! # TodoRepository
//!
//! タスクレコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **狭い境界**: Create / Get / List / Update / Delete の 5 操作のみを公開
//! - **述語指定の更新**: ORM の変更追跡に頼らず、単一の UPDATE 文で上書きする
//! - **単文の原子性**: 1 行 CRUD のみのためトランザクションは使用しない

use async_trait::async_trait;
use sqlx::PgPool;
use yarukoto_domain::todo::{NewTodo, Todo, TodoId};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクレコードの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、API 層からトレイト経由で利用する。
///
/// 排他制御は行わない。同一 ID への並行更新は後勝ちとなる。
#[async_trait]
pub trait TodoRepository: Send + Sync {
   /// タスクを作成する
   ///
   /// 識別子はデータベースのシーケンスで採番される。
   ///
   /// # 戻り値
   ///
   /// 採番済み識別子を含む作成後のレコード。
   async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError>;

   /// ID でタスクを検索する
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(todo))`: タスクが見つかった場合
   /// - `Ok(None)`: タスクが見つからない場合
   /// - `Err(_)`: データベースエラー
   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

   /// 全タスクを取得する
   ///
   /// 順序はトレイト契約上未規定。実装が安定した順序を選んでよい。
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

   /// タスクの名前と完了フラグを上書きする
   ///
   /// 識別子は変更されない。
   ///
   /// # 戻り値
   ///
   /// 更新対象の行が存在したかどうか。
   async fn update(&self, id: TodoId, name: &str, is_completed: bool)
   -> Result<bool, InfraError>;

   /// タスクを削除する
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(todo))`: 削除した直前のレコード
   /// - `Ok(None)`: 指定 ID のタスクが存在しない場合
   async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;
}

/// `todos` テーブルの行
///
/// sqlx の実行時 API でフェッチし、ドメインエンティティに変換する。
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
   id:           i64,
   name:         String,
   is_completed: bool,
}

impl TodoRow {
   fn into_todo(self) -> Todo {
      Todo::from_db(TodoId::from_db(self.id), self.name, self.is_completed)
   }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
   pool: PgPool,
}

impl PostgresTodoRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
   async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError> {
      let row = sqlx::query_as::<_, TodoRow>(
         r#"
            INSERT INTO todos (name, is_completed)
            VALUES ($1, $2)
            RETURNING id, name, is_completed
            "#,
      )
      .bind(&new_todo.name)
      .bind(new_todo.is_completed)
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into_todo())
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      let row = sqlx::query_as::<_, TodoRow>(
         r#"
            SELECT id, name, is_completed
            FROM todos
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(TodoRow::into_todo))
   }

   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      let rows = sqlx::query_as::<_, TodoRow>(
         r#"
            SELECT id, name, is_completed
            FROM todos
            ORDER BY id
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(TodoRow::into_todo).collect())
   }

   async fn update(
      &self,
      id: TodoId,
      name: &str,
      is_completed: bool,
   ) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            UPDATE todos
            SET name = $2, is_completed = $3
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .bind(name)
      .bind(is_completed)
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }

   async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      let row = sqlx::query_as::<_, TodoRow>(
         r#"
            DELETE FROM todos
            WHERE id = $1
            RETURNING id, name, is_completed
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(TodoRow::into_todo))
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresTodoRepository>();
   }
}
