//! # Todo API ハンドラ
//!
//! `/api/v1/todos` 配下のエンドポイントを実装する。
//!
//! | メソッド | パス | 成功時 |
//! |----------|------|--------|
//! | POST | `/api/v1/todos/` | 201 `{ status, message, resourceId }` |
//! | GET | `/api/v1/todos/` | 200 `{ status, data: [...] }` |
//! | GET | `/api/v1/todos/{id}` | 200 `{ status, data }` |
//! | PUT | `/api/v1/todos/{id}` | 200 `{ status, message }` |
//! | DELETE | `/api/v1/todos/{id}` | 200 `{ status, message }` |
//!
//! 見つからない場合はいずれも 404 `{ status, message }` を返す。

use std::sync::Arc;

use axum::{
    Form,
    Json,
    extract::{Path, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use todo_audit_domain::todo::{Todo, TodoId};
use todo_audit_infra::repository::TodoRepository;
use todo_audit_shared::{ApiResponse, CreatedResponse, MessageResponse};

use crate::{
    error::CoreError,
    usecase::{TodoInput, TodoUseCaseImpl},
};

/// Todo ハンドラーの State
pub struct TodoState<R> {
    pub usecase: TodoUseCaseImpl<R>,
}

/// 作成・更新リクエストのフォーム（`application/x-www-form-urlencoded`）
#[derive(Debug, Default, Deserialize)]
pub struct TodoForm {
    pub title:     Option<String>,
    pub completed: Option<String>,
}

impl From<TodoForm> for TodoInput {
    fn from(form: TodoForm) -> Self {
        Self {
            title:     form.title,
            completed: form.completed,
        }
    }
}

/// Todo のレスポンス DTO
///
/// 整数フラグの `completed` を真偽値で返す。
#[derive(Debug, Serialize)]
pub struct TodoDto {
    pub id:        TodoId,
    pub title:     String,
    pub completed: bool,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:        todo.id(),
            title:     todo.title().to_string(),
            completed: todo.completed().is_completed(),
        }
    }
}

/// フォームを取り出す
///
/// 型変換以上の入力検証は行わないため、読めないフォームは空入力として扱う。
fn form_or_default(form: Result<Form<TodoForm>, FormRejection>) -> TodoInput {
    match form {
        Ok(Form(form)) => form.into(),
        Err(rejection) => {
            tracing::debug!(%rejection, "フォームを解釈できないため空入力として扱います");
            TodoInput::default()
        }
    }
}

/// Todo を作成する
///
/// ## エンドポイント
/// POST /api/v1/todos/
pub async fn create_todo<R>(
    State(state): State<Arc<TodoState<R>>>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> Result<Response, CoreError>
where
    R: TodoRepository,
{
    let id = state.usecase.create_todo(form_or_default(form)).await?;

    let response = CreatedResponse::new("Todo item created successfully!", id);
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Todo 一覧を取得する
///
/// ## エンドポイント
/// GET /api/v1/todos/
pub async fn list_todos<R>(State(state): State<Arc<TodoState<R>>>) -> Result<Response, CoreError>
where
    R: TodoRepository,
{
    let todos = state.usecase.list_todos().await?;

    let response = ApiResponse::ok(todos.iter().map(TodoDto::from).collect::<Vec<_>>());
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Todo を 1 件取得する
///
/// ## エンドポイント
/// GET /api/v1/todos/{id}
pub async fn get_todo<R>(
    State(state): State<Arc<TodoState<R>>>,
    Path(id): Path<String>,
) -> Result<Response, CoreError>
where
    R: TodoRepository,
{
    let todo = state.usecase.get_todo(&id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(TodoDto::from(&todo)))).into_response())
}

/// Todo を更新する
///
/// 更新後の Todo は返さない。
///
/// ## エンドポイント
/// PUT /api/v1/todos/{id}
pub async fn update_todo<R>(
    State(state): State<Arc<TodoState<R>>>,
    Path(id): Path<String>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> Result<Response, CoreError>
where
    R: TodoRepository,
{
    state.usecase.update_todo(&id, form_or_default(form)).await?;

    let response = MessageResponse::new(200, "Todo updated successfully!");
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Todo を削除する
///
/// ## エンドポイント
/// DELETE /api/v1/todos/{id}
pub async fn delete_todo<R>(
    State(state): State<Arc<TodoState<R>>>,
    Path(id): Path<String>,
) -> Result<Response, CoreError>
where
    R: TodoRepository,
{
    state.usecase.delete_todo(&id).await?;

    let response = MessageResponse::new(200, "Todo deleted successfully!");
    Ok((StatusCode::OK, Json(response)).into_response())
}
