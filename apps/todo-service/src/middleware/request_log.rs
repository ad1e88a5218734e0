//! # リクエスト監査ログミドルウェア
//!
//! 1 リクエストごとに、リクエスト内容・レスポンス本文・ステータス・処理時間を
//! `request_logs` テーブルへ 1 行記録する。
//!
//! ## 処理の流れ
//!
//! ```text
//! リクエスト受信
//!   → ボディを一度だけバッファに読み込む（ハンドラ用に同じバイト列で再構築）
//!   → ハンドラ実行
//!   → レスポンスボディをバッファに読み込む
//!   → 監査ログを同期的に書き込む
//!   → バッファからレスポンスを再構築して返す
//! ```
//!
//! ## 書き込み失敗の扱い
//!
//! 監査ログの書き込みは業務データの書き込みとは独立しており、
//! 失敗しても WARN ログを出力するだけでレスポンスは変えない。

use std::{sync::Arc, time::Instant};

use axum::{
    Json,
    body::{Body, Bytes, to_bytes},
    extract::State,
    http::{Request, StatusCode, header, response::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use todo_audit_domain::{
    clock::Clock,
    request_log::{CapturedRequest, NewRequestLog},
};
use todo_audit_infra::repository::RequestLogRepository;
use todo_audit_shared::MessageResponse;

use crate::error::CoreError;

/// バッファに読み込むリクエストボディの上限（1 MiB）
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// 監査ログミドルウェアの State
#[derive(Clone)]
pub struct RequestLogState {
    pub repository: Arc<dyn RequestLogRepository>,
    pub clock:      Arc<dyn Clock>,
}

/// リクエスト監査ログミドルウェア
pub async fn record_request_log(
    State(state): State<RequestLogState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let (parts, body) = request.into_parts();
    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();
    let query = parts.uri.query().map(str::to_string);

    let (request_bytes, response) = match to_bytes(body, MAX_REQUEST_BODY_BYTES).await {
        Ok(bytes) => {
            tracing::debug!(request.body = %String::from_utf8_lossy(&bytes), "リクエストボディ");
            let request = Request::from_parts(parts, Body::from(bytes.clone()));
            (bytes, next.run(request).await)
        }
        Err(e) => {
            tracing::warn!(error.message = %e, "リクエストボディの読み取りに失敗しました");
            (Bytes::new(), unreadable_body_response())
        }
    };

    let captured = CapturedRequest {
        method,
        path,
        query,
        body: String::from_utf8_lossy(&request_bytes).into_owned(),
    };

    let (response_parts, response_bytes) = buffer_response(response).await;
    let status = response_parts.status;

    let log = NewRequestLog::from_exchange(
        captured,
        status.as_u16(),
        String::from_utf8_lossy(&response_bytes).into_owned(),
        state.clock.now(),
        started.elapsed(),
    );

    match state.repository.insert(&log).await {
        Ok(id) => tracing::debug!(
            request_log.id = %id,
            http.status_code = status.as_u16(),
            http.latency_ms = %log.total_time,
            "監査ログを記録しました"
        ),
        Err(e) => tracing::warn!(
            error.message = %e,
            span_trace = %e.span_trace(),
            request_uri = %log.request_uri,
            "監査ログの記録に失敗しました"
        ),
    }

    let mut response = Response::from_parts(response_parts, Body::from(response_bytes));
    // 本文を差し替えた場合に長さがずれないよう、送出時に再計算させる
    response.headers_mut().remove(header::CONTENT_LENGTH);
    response
}

/// レスポンスボディをバッファに読み込む
///
/// 読み取りに失敗した場合は 500 の内部エラーレスポンスに差し替える。
async fn buffer_response(response: Response) -> (Parts, Bytes) {
    let (parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (parts, bytes),
        Err(e) => {
            let fallback =
                CoreError::Internal(format!("レスポンスボディの読み取りに失敗しました: {e}"));
            let (parts, body) = fallback.into_response().into_parts();
            (parts, to_bytes(body, usize::MAX).await.unwrap_or_default())
        }
    }
}

/// ボディを読めなかったリクエストへのレスポンス
fn unreadable_body_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse::new(
            StatusCode::BAD_REQUEST.as_u16(),
            "Invalid request body",
        )),
    )
        .into_response()
}
