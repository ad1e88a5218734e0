//! # RequestLogRepository
//!
//! リクエスト監査ログの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **追記のみ**: 挿入以外の操作は提供しない
//! - **業務データと独立**: Todo の書き込みと同一トランザクションにしない

use async_trait::async_trait;
use sqlx::PgPool;
use todo_audit_domain::request_log::{NewRequestLog, RequestLogId};

use crate::error::InfraError;

/// 監査ログリポジトリトレイト
#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    /// 監査ログを挿入し、採番された ID を返す
    async fn insert(&self, log: &NewRequestLog) -> Result<RequestLogId, InfraError>;
}

/// PostgreSQL 実装の RequestLogRepository
#[derive(Debug, Clone)]
pub struct PostgresRequestLogRepository {
    pool: PgPool,
}

impl PostgresRequestLogRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestLogRepository for PostgresRequestLogRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(uri = %log.request_uri))]
    async fn insert(&self, log: &NewRequestLog) -> Result<RequestLogId, InfraError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO request_logs (
                request_body, request_uri, request_method, request_time,
                response_body, response_status, response_time, total_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&log.request_body)
        .bind(&log.request_uri)
        .bind(&log.request_method)
        .bind(&log.request_time)
        .bind(&log.response_body)
        .bind(&log.response_status)
        .bind(log.response_time)
        .bind(&log.total_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(RequestLogId::from_i64(id))
    }
}
