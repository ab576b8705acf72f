//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! yarukoto-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use yarukoto_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

/// インメモリ実装の TodoRepository
///
/// PostgreSQL 実装と同じ観測可能な振る舞いを持つ:
/// - 識別子は 1 から単調増加で採番される
/// - 存在しない ID への update / delete は行なしを報告する
/// - `find_all` は ID 順で返す
#[derive(Clone)]
pub struct MockTodoRepository {
   todos:   Arc<Mutex<Vec<Todo>>>,
   next_id: Arc<Mutex<i64>>,
}

impl Default for MockTodoRepository {
   fn default() -> Self {
      Self::new()
   }
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self {
         todos:   Arc::new(Mutex::new(Vec::new())),
         next_id: Arc::new(Mutex::new(1)),
      }
   }

   /// 保持しているタスク数を返す（テストのアサーション用）
   pub fn len(&self) -> usize {
      self.todos.lock().unwrap().len()
   }

   /// タスクを 1 件も保持していないかを返す
   pub fn is_empty(&self) -> bool {
      self.todos.lock().unwrap().is_empty()
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError> {
      let mut next_id = self.next_id.lock().unwrap();
      let id = TodoId::from_db(*next_id);
      *next_id += 1;

      let todo = Todo::from_db(id, new_todo.name, new_todo.is_completed);
      self.todos.lock().unwrap().push(todo.clone());
      Ok(todo)
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      Ok(self
         .todos
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      let mut todos = self.todos.lock().unwrap().clone();
      todos.sort_by_key(Todo::id);
      Ok(todos)
   }

   async fn update(
      &self,
      id: TodoId,
      name: &str,
      is_completed: bool,
   ) -> Result<bool, InfraError> {
      let mut todos = self.todos.lock().unwrap();
      let Some(pos) = todos.iter().position(|t| t.id() == id) else {
         return Ok(false);
      };
      todos[pos] = Todo::from_db(id, name.to_string(), is_completed);
      Ok(true)
   }

   async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      let mut todos = self.todos.lock().unwrap();
      let Some(pos) = todos.iter().position(|t| t.id() == id) else {
         return Ok(None);
      };
      Ok(Some(todos.remove(pos)))
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn new_todo(name: &str) -> NewTodo {
      NewTodo {
         name:         name.to_string(),
         is_completed: false,
      }
   }

   #[tokio::test]
   async fn test_採番は1から単調増加する() {
      let sut = MockTodoRepository::new();

      let first = sut.insert(new_todo("a")).await.unwrap();
      let second = sut.insert(new_todo("b")).await.unwrap();

      assert_eq!(first.id().as_i64(), 1);
      assert_eq!(second.id().as_i64(), 2);
   }

   #[tokio::test]
   async fn test_作成したタスクをidで取得できる() {
      let sut = MockTodoRepository::new();

      let created = sut.insert(new_todo("牛乳を買う")).await.unwrap();
      let found = sut.find_by_id(created.id()).await.unwrap();

      assert_eq!(found, Some(created));
   }

   #[tokio::test]
   async fn test_存在しないidのupdateは行なしを報告しレコードを作成しない() {
      let sut = MockTodoRepository::new();

      let updated = sut
         .update(TodoId::from_db(999), "ghost", true)
         .await
         .unwrap();

      assert!(!updated);
      assert!(sut.is_empty());
   }

   #[tokio::test]
   async fn test_deleteは直前のレコードを返し2回目はnoneを返す() {
      let sut = MockTodoRepository::new();
      let created = sut.insert(new_todo("捨てる")).await.unwrap();

      let first = sut.delete(created.id()).await.unwrap();
      let second = sut.delete(created.id()).await.unwrap();

      assert_eq!(first, Some(created));
      assert_eq!(second, None);
   }

   #[tokio::test]
   async fn test_find_allはid順で全件を返す() {
      let sut = MockTodoRepository::new();
      for name in ["a", "b", "c"] {
         sut.insert(new_todo(name)).await.unwrap();
      }

      let todos = sut.find_all().await.unwrap();

      assert_eq!(todos.len(), 3);
      let ids: Vec<i64> = todos.iter().map(|t| t.id().as_i64()).collect();
      assert_eq!(ids, vec![1, 2, 3]);
   }
}
