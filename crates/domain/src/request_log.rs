//! # リクエスト監査ログ
//!
//! 1 回のリクエスト/レスポンスのやり取りを記録するドメインモデル。
//!
//! ## 設計方針
//!
//! - **不変性**: 監査ログは一度作成されたら変更・削除されない
//! - **独立性**: Todo のデータとは紐付けない（業務データの書き込みとは別操作）
//! - **文字列表現**: ステータスや処理時間は既存スキーマに合わせて文字列で保持する
//!
//! ## フィールドの意味
//!
//! | フィールド | 内容 |
//! |-----------|------|
//! | `request_uri` | パス + `?クエリ`（クエリがある場合のみ） |
//! | `request_time` | レスポンス生成時刻（`%Y-%m-%d %H:%M:%S`） |
//! | `response_time` | レスポンス生成時刻（タイムスタンプ） |
//! | `total_time` | 受信から完了までの経過ミリ秒 |

use std::time::Duration;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `request_time` の書式
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 監査ログの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct RequestLogId(i64);

impl RequestLogId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ハンドラ実行前に捕捉したリクエスト情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub path:   String,
    pub query:  Option<String>,
    pub body:   String,
}

impl CapturedRequest {
    /// パスとクエリ文字列を結合した URI
    ///
    /// クエリが空の場合はパスのみを返す。
    pub fn request_uri(&self) -> String {
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => format!("{}?{}", self.path, query),
            _ => self.path.clone(),
        }
    }
}

/// 挿入前の監査ログ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequestLog {
    pub request_body:    String,
    pub request_uri:     String,
    pub request_method:  String,
    pub request_time:    String,
    pub response_body:   String,
    pub response_status: String,
    pub response_time:   DateTime<Utc>,
    pub total_time:      String,
}

impl NewRequestLog {
    /// 捕捉したリクエストと完了したレスポンスから監査ログを組み立てる
    ///
    /// `elapsed` はミリ秒未満を切り捨てる。
    pub fn from_exchange(
        request: CapturedRequest,
        response_status: u16,
        response_body: String,
        completed_at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Self {
        let request_uri = request.request_uri();
        Self {
            request_body: request.body,
            request_uri,
            request_method: request.method,
            request_time: completed_at.format(REQUEST_TIME_FORMAT).to_string(),
            response_body,
            response_status: response_status.to_string(),
            response_time: completed_at,
            total_time: elapsed.as_millis().to_string(),
        }
    }
}

/// 永続化済みの監査ログ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLog {
    pub id:    RequestLogId,
    pub entry: NewRequestLog,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn captured(query: Option<&str>) -> CapturedRequest {
        CapturedRequest {
            method: "PUT".to_string(),
            path:   "/api/v1/todos/3".to_string(),
            query:  query.map(str::to_string),
            body:   "title=buy+milk&completed=1".to_string(),
        }
    }

    #[test]
    fn test_request_uriはクエリがある場合に結合する() {
        assert_eq!(
            captured(Some("dry=1")).request_uri(),
            "/api/v1/todos/3?dry=1"
        );
    }

    #[test]
    fn test_request_uriは空のクエリを無視する() {
        assert_eq!(captured(Some("")).request_uri(), "/api/v1/todos/3");
        assert_eq!(captured(None).request_uri(), "/api/v1/todos/3");
    }

    #[test]
    fn test_from_exchangeで全フィールドが設定される() {
        let completed_at = DateTime::parse_from_rfc3339("2024-03-05T07:08:09Z")
            .unwrap()
            .with_timezone(&Utc);

        let log = NewRequestLog::from_exchange(
            captured(None),
            200,
            r#"{"status":200,"message":"Todo updated successfully!"}"#.to_string(),
            completed_at,
            Duration::from_micros(12_999),
        );

        assert_eq!(
            log,
            NewRequestLog {
                request_body:    "title=buy+milk&completed=1".to_string(),
                request_uri:     "/api/v1/todos/3".to_string(),
                request_method:  "PUT".to_string(),
                request_time:    "2024-03-05 07:08:09".to_string(),
                response_body:   r#"{"status":200,"message":"Todo updated successfully!"}"#
                    .to_string(),
                response_status: "200".to_string(),
                response_time:   completed_at,
                total_time:      "12".to_string(),
            }
        );
    }
}
