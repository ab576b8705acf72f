//! # タスク API ハンドラ
//!
//! タスクレコードの CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! - `POST /todos` - タスク作成（201 + Location ヘッダ）
//! - `GET /todos` - 全件取得
//! - `GET /todos/{id}` - 1 件取得
//! - `PUT /todos/{id}` - 名前と完了フラグの上書き（204）
//! - `DELETE /todos/{id}` - 削除（削除したレコードを返す）

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::{StatusCode, header},
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use yarukoto_domain::todo::{NewTodo, Todo, TodoId};
use yarukoto_infra::repository::TodoRepository;

use crate::error::ApiError;

/// タスクハンドラの State
pub struct TodoState<R> {
   pub repository: R,
}

/// タスクレコードのワイヤ表現
///
/// 完了フラグはワイヤ上では camelCase（`isCompleted`）。
#[derive(Debug, Serialize)]
pub struct TodoDto {
   pub id:           i64,
   pub name:         String,
   #[serde(rename = "isCompleted")]
   pub is_completed: bool,
}

impl TodoDto {
   fn from_todo(todo: &Todo) -> Self {
      Self {
         id:           todo.id().as_i64(),
         name:         todo.name().to_string(),
         is_completed: todo.is_completed(),
      }
   }
}

/// 作成・更新リクエストのボディ
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
   pub name:         String,
   #[serde(rename = "isCompleted", default)]
   pub is_completed: bool,
}

/// パスパラメータの ID をドメインの識別子に変換する
///
/// 1 未満の値を持つレコードは存在し得ないため、変換失敗は 404 として扱う。
fn parse_id(id: i64) -> Result<TodoId, ApiError> {
   TodoId::new(id).map_err(|_| ApiError::NotFound(format!("Todo が見つかりません: {id}")))
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /todos
///
/// 採番済み ID を含むレコードを 201 で返す。`Location` ヘッダに
/// 作成したリソースのパスを設定する。
pub async fn create_todo<R>(
   State(state): State<Arc<TodoState<R>>>,
   Json(payload): Json<TodoPayload>,
) -> Result<Response, ApiError>
where
   R: TodoRepository,
{
   let todo = state
      .repository
      .insert(NewTodo {
         name:         payload.name,
         is_completed: payload.is_completed,
      })
      .await?;

   let location = format!("/todos/{}", todo.id());

   Ok((
      StatusCode::CREATED,
      [(header::LOCATION, location)],
      Json(TodoDto::from_todo(&todo)),
   )
      .into_response())
}

/// 全タスクを取得する
///
/// ## エンドポイント
/// GET /todos
pub async fn list_todos<R>(State(state): State<Arc<TodoState<R>>>) -> Result<Response, ApiError>
where
   R: TodoRepository,
{
   let todos = state.repository.find_all().await?;

   let response: Vec<TodoDto> = todos.iter().map(TodoDto::from_todo).collect();

   Ok((StatusCode::OK, Json(response)).into_response())
}

/// タスクを 1 件取得する
///
/// ## エンドポイント
/// GET /todos/{id}
pub async fn get_todo<R>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
   R: TodoRepository,
{
   let todo_id = parse_id(id)?;

   let todo = state
      .repository
      .find_by_id(todo_id)
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: {id}")))?;

   Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))).into_response())
}

/// タスクの名前と完了フラグを上書きする
///
/// ## エンドポイント
/// PUT /todos/{id}
///
/// 単一の UPDATE 文による述語指定の更新。ID は変更されない。
/// 対象が存在しない場合は 404 を返し、レコードを作成しない。
pub async fn update_todo<R>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<i64>,
   Json(payload): Json<TodoPayload>,
) -> Result<Response, ApiError>
where
   R: TodoRepository,
{
   let todo_id = parse_id(id)?;

   let updated = state
      .repository
      .update(todo_id, &payload.name, payload.is_completed)
      .await?;

   if !updated {
      return Err(ApiError::NotFound(format!("Todo が見つかりません: {id}")));
   }

   Ok(StatusCode::NO_CONTENT.into_response())
}

/// タスクを削除する
///
/// ## エンドポイント
/// DELETE /todos/{id}
///
/// 削除した直前のレコードを 200 で返す。
pub async fn delete_todo<R>(
   State(state): State<Arc<TodoState<R>>>,
   Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
   R: TodoRepository,
{
   let todo_id = parse_id(id)?;

   let todo = state
      .repository
      .delete(todo_id)
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: {id}")))?;

   Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))).into_response())
}

#[cfg(test)]
mod tests {
   use axum::{
      Router,
      body::Body,
      http::{Method, Request},
      routing::get,
   };
   use pretty_assertions::assert_eq;
   use tower::ServiceExt;
   use yarukoto_infra::mock::MockTodoRepository;

   use super::*;

   fn create_test_app(repository: MockTodoRepository) -> Router {
      let state = Arc::new(TodoState { repository });

      Router::new()
         .route(
            "/todos",
            get(list_todos::<MockTodoRepository>).post(create_todo::<MockTodoRepository>),
         )
         .route(
            "/todos/{id}",
            get(get_todo::<MockTodoRepository>)
               .put(update_todo::<MockTodoRepository>)
               .delete(delete_todo::<MockTodoRepository>),
         )
         .with_state(state)
   }

   fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
      Request::builder()
         .method(method)
         .uri(uri)
         .header(http::header::CONTENT_TYPE, "application/json")
         .body(Body::from(body.to_string()))
         .unwrap()
   }

   fn get_request(uri: &str) -> Request<Body> {
      Request::builder()
         .method(Method::GET)
         .uri(uri)
         .body(Body::empty())
         .unwrap()
   }

   async fn response_json(response: Response) -> serde_json::Value {
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&body).unwrap()
   }

   // ===== 作成 =====

   #[tokio::test]
   async fn test_post_todosは201と採番済みレコードを返す() {
      let sut = create_test_app(MockTodoRepository::new());

      let request = json_request(
         Method::POST,
         "/todos",
         serde_json::json!({ "name": "buy milk", "isCompleted": false }),
      );
      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(response.status(), StatusCode::CREATED);
      assert_eq!(
         response.headers().get(header::LOCATION).unwrap(),
         "/todos/1"
      );

      let json = response_json(response).await;
      assert!(json["id"].as_i64().unwrap() >= 1);
      assert_eq!(json["name"], "buy milk");
      assert_eq!(json["isCompleted"], false);
   }

   #[tokio::test]
   async fn test_作成したタスクをidで取得すると同じ内容が返る() {
      let sut = create_test_app(MockTodoRepository::new());

      let request = json_request(
         Method::POST,
         "/todos",
         serde_json::json!({ "name": "buy milk", "isCompleted": false }),
      );
      let response = sut.clone().oneshot(request).await.unwrap();
      let created = response_json(response).await;
      let id = created["id"].as_i64().unwrap();

      let response = sut.oneshot(get_request(&format!("/todos/{id}"))).await.unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      let json = response_json(response).await;
      assert_eq!(json["id"], id);
      assert_eq!(json["name"], "buy milk");
      assert_eq!(json["isCompleted"], false);
   }

   // ===== 一覧 =====

   #[tokio::test]
   async fn test_get_todosはn件作成後にちょうどn件を返す() {
      let sut = create_test_app(MockTodoRepository::new());

      for i in 0..3 {
         let request = json_request(
            Method::POST,
            "/todos",
            serde_json::json!({ "name": format!("task-{i}"), "isCompleted": false }),
         );
         sut.clone().oneshot(request).await.unwrap();
      }

      let response = sut.oneshot(get_request("/todos")).await.unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      let json = response_json(response).await;
      assert_eq!(json.as_array().unwrap().len(), 3);
   }

   #[tokio::test]
   async fn test_get_todosは空の場合に空配列を返す() {
      let sut = create_test_app(MockTodoRepository::new());

      let response = sut.oneshot(get_request("/todos")).await.unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      let json = response_json(response).await;
      assert_eq!(json, serde_json::json!([]));
   }

   // ===== 1 件取得 =====

   #[tokio::test]
   async fn test_get_todoは存在しないidに404を返す() {
      let sut = create_test_app(MockTodoRepository::new());

      let response = sut.oneshot(get_request("/todos/999")).await.unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
   }

   #[tokio::test]
   async fn test_get_todoは0以下のidに404を返す() {
      let sut = create_test_app(MockTodoRepository::new());

      let response = sut.oneshot(get_request("/todos/0")).await.unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
   }

   // ===== 更新 =====

   #[tokio::test]
   async fn test_put_todoは204を返しフィールドを上書きする() {
      let sut = create_test_app(MockTodoRepository::new());

      let request = json_request(
         Method::POST,
         "/todos",
         serde_json::json!({ "name": "draft", "isCompleted": false }),
      );
      sut.clone().oneshot(request).await.unwrap();

      let request = json_request(
         Method::PUT,
         "/todos/1",
         serde_json::json!({ "name": "final", "isCompleted": true }),
      );
      let response = sut.clone().oneshot(request).await.unwrap();
      assert_eq!(response.status(), StatusCode::NO_CONTENT);

      let response = sut.oneshot(get_request("/todos/1")).await.unwrap();
      let json = response_json(response).await;
      assert_eq!(json["id"], 1);
      assert_eq!(json["name"], "final");
      assert_eq!(json["isCompleted"], true);
   }

   #[tokio::test]
   async fn test_put_todoは存在しないidに404を返しレコードを作成しない() {
      let repository = MockTodoRepository::new();
      let sut = create_test_app(repository.clone());

      let request = json_request(
         Method::PUT,
         "/todos/999",
         serde_json::json!({ "name": "ghost", "isCompleted": true }),
      );
      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      assert!(repository.is_empty());
   }

   // ===== 削除 =====

   #[tokio::test]
   async fn test_delete_todoは削除したレコードを返し2回目は404を返す() {
      let sut = create_test_app(MockTodoRepository::new());

      let request = json_request(
         Method::POST,
         "/todos",
         serde_json::json!({ "name": "throwaway", "isCompleted": true }),
      );
      sut.clone().oneshot(request).await.unwrap();

      let delete_request = || {
         Request::builder()
            .method(Method::DELETE)
            .uri("/todos/1")
            .body(Body::empty())
            .unwrap()
      };

      let response = sut.clone().oneshot(delete_request()).await.unwrap();
      assert_eq!(response.status(), StatusCode::OK);
      let json = response_json(response).await;
      assert_eq!(json["id"], 1);
      assert_eq!(json["name"], "throwaway");
      assert_eq!(json["isCompleted"], true);

      let response = sut.oneshot(delete_request()).await.unwrap();
      assert_eq!(response.status(), StatusCode::NOT_FOUND);
   }

   // ===== ボディ形式 =====

   #[tokio::test]
   async fn test_is_completed省略時はfalseとして作成される() {
      let sut = create_test_app(MockTodoRepository::new());

      let request = json_request(
         Method::POST,
         "/todos",
         serde_json::json!({ "name": "flag omitted" }),
      );
      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(response.status(), StatusCode::CREATED);
      let json = response_json(response).await;
      assert_eq!(json["isCompleted"], false);
   }
}
