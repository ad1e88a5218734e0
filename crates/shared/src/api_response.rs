//! # API レスポンスエンベロープ
//!
//! すべてのレスポンスは本文にも HTTP ステータスコードを含める。
//!
//! | 型 | 形式 | 用途 |
//! |----|------|------|
//! | [`ApiResponse`] | `{ "status", "data" }` | 取得系 |
//! | [`MessageResponse`] | `{ "status", "message" }` | 更新・削除・404 |
//! | [`CreatedResponse`] | `{ "status", "message", "resourceId" }` | 作成 |

use serde::{Deserialize, Serialize};

/// データを返すレスポンス
///
/// ## 使用例
///
/// ```
/// use todo_audit_shared::ApiResponse;
///
/// let response = ApiResponse::ok("hello");
/// assert_eq!(response.status, 200);
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data:   T,
}

impl<T> ApiResponse<T> {
    /// 200 OK のレスポンスを作成する
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }
}

/// メッセージのみを返すレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status:  u16,
    pub message: String,
}

impl MessageResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// リソース作成時のレスポンス
///
/// 作成されたリソースの ID を `resourceId` として返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse<Id> {
    pub status:      u16,
    pub message:     String,
    pub resource_id: Id,
}

impl<Id> CreatedResponse<Id> {
    /// 201 Created のレスポンスを作成する
    pub fn new(message: impl Into<String>, resource_id: Id) -> Self {
        Self {
            status: 201,
            message: message.into(),
            resource_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_api_responseのjson形状() {
        let json = serde_json::to_value(ApiResponse::ok(vec!["a", "b"])).unwrap();

        assert_eq!(json, json!({ "status": 200, "data": ["a", "b"] }));
    }

    #[test]
    fn test_message_responseのjson形状() {
        let json = serde_json::to_value(MessageResponse::new(404, "No todo found!")).unwrap();

        assert_eq!(json, json!({ "status": 404, "message": "No todo found!" }));
    }

    #[test]
    fn test_created_responseはresource_idをキャメルケースで出力する() {
        let json = serde_json::to_value(CreatedResponse::new("created", 7)).unwrap();

        assert_eq!(
            json,
            json!({ "status": 201, "message": "created", "resourceId": 7 })
        );
        assert!(json.get("resource_id").is_none());
    }
}
