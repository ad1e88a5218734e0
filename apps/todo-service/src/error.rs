//! # Todo Service エラー定義
//!
//! ユースケース・ハンドラで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | 本文 |
//! |--------|----------------|------|
//! | `NotFound` | 404 | `{ status, message }` |
//! | `Database` | 500 | `{ status, message, error: "database" }` |
//! | `Internal` | 500 | `{ status, message, error: "internal" }` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_audit_domain::DomainError;
use todo_audit_infra::InfraError;
use todo_audit_shared::{ErrorResponse, MessageResponse};

/// Todo が見つからない場合のメッセージ
pub const TODO_NOT_FOUND_MESSAGE: &str = "No todo found!";

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } | DomainError::InvalidId(_) => {
                CoreError::NotFound(err.to_string())
            }
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound(detail) => {
                tracing::debug!(%detail, "リソースが見つかりません");
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageResponse::new(
                        StatusCode::NOT_FOUND.as_u16(),
                        TODO_NOT_FOUND_MESSAGE,
                    )),
                )
                    .into_response()
            }
            CoreError::Database(e) => {
                tracing::error!(
                    error.message = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                internal_error_response("database")
            }
            CoreError::Internal(msg) => {
                tracing::error!(error.message = %msg, "内部エラー");
                internal_error_response("internal")
            }
        }
    }
}

/// 500 レスポンスを組み立てる
pub(crate) fn internal_error_response(kind: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error(kind)),
    )
        .into_response()
}
