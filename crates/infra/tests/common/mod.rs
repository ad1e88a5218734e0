//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use todo_audit_domain::{
    request_log::{CapturedRequest, NewRequestLog},
    todo::{CompletedFlag, NewTodo},
};

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// 新規 Todo を作成
pub fn new_todo(title: &str, completed: CompletedFlag) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        completed,
    }
}

/// GET 一覧の監査ログを作成
pub fn new_request_log(status: u16, response_body: &str) -> NewRequestLog {
    NewRequestLog::from_exchange(
        CapturedRequest {
            method: "GET".to_string(),
            path:   "/api/v1/todos/".to_string(),
            query:  Some("verbose=1".to_string()),
            body:   String::new(),
        },
        status,
        response_body.to_string(),
        test_now(),
        std::time::Duration::from_millis(3),
    )
}
