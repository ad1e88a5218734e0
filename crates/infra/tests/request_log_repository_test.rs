//! RequestLogRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p todo-audit-infra --test request_log_repository_test
//! ```

mod common;

use common::{new_request_log, test_now};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use todo_audit_infra::repository::{PostgresRequestLogRepository, RequestLogRepository};

#[sqlx::test(migrations = "../../migrations")]
async fn test_監査ログを挿入できる(pool: PgPool) {
    let sut = PostgresRequestLogRepository::new(pool.clone());
    let log = new_request_log(404, r#"{"status":404,"message":"No todo found!"}"#);

    let id = sut.insert(&log).await.unwrap();

    // 挿入されたデータを直接 SQL で検証
    let row: (String, String, String, String, String, String, chrono::DateTime<chrono::Utc>, String) =
        sqlx::query_as(
            r#"
            SELECT request_body, request_uri, request_method, request_time,
                   response_body, response_status, response_time, total_time
            FROM request_logs
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_one(&pool)
        .await
        .expect("挿入されたログが見つからない");

    assert_eq!(row.0, "");
    assert_eq!(row.1, "/api/v1/todos/?verbose=1");
    assert_eq!(row.2, "GET");
    assert_eq!(row.3, "2023-11-14 22:13:20");
    assert_eq!(row.4, r#"{"status":404,"message":"No todo found!"}"#);
    assert_eq!(row.5, "404");
    assert_eq!(row.6, test_now());
    assert_eq!(row.7, "3");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_挿入ごとに異なるidが採番される(pool: PgPool) {
    let sut = PostgresRequestLogRepository::new(pool.clone());

    let first = sut.insert(&new_request_log(200, "{}")).await.unwrap();
    let second = sut.insert(&new_request_log(200, "{}")).await.unwrap();

    assert_ne!(first, second);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM request_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}
