//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## レイヤー構成
//!
//! ```text
//! TraceLayer → record_request_log → handler
//! ```

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use todo_audit_domain::clock::Clock;
use todo_audit_infra::repository::{RequestLogRepository, TodoRepository};
use tower_http::trace::TraceLayer;

use crate::{
    handler::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo},
    middleware::{RequestLogState, record_request_log},
    usecase::TodoUseCaseImpl,
};

/// Todo リソースのベースパス
pub const TODOS_BASE_PATH: &str = "/api/v1/todos";

/// ルーターを構築する
///
/// コレクションは末尾スラッシュの有無どちらでも受け付ける。
pub fn build_app<R>(
    todo_repository: R,
    request_log_repository: Arc<dyn RequestLogRepository>,
    clock: Arc<dyn Clock>,
) -> Router
where
    R: TodoRepository + 'static,
{
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });
    let request_log_state = RequestLogState {
        repository: request_log_repository,
        clock,
    };

    let collection = get(list_todos::<R>).post(create_todo::<R>);

    Router::new()
        .route(TODOS_BASE_PATH, collection.clone())
        .route(&format!("{TODOS_BASE_PATH}/"), collection)
        .route(
            &format!("{TODOS_BASE_PATH}/{{id}}"),
            get(get_todo::<R>)
                .put(update_todo::<R>)
                .delete(delete_todo::<R>),
        )
        .with_state(todo_state)
        .layer(from_fn_with_state(request_log_state, record_request_log))
        .layer(TraceLayer::new_for_http())
}
