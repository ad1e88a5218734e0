//! # エラーレスポンス
//!
//! 予期しない失敗（DB エラー等）を返すときの共通形式。
//! 404 は [`MessageResponse`](crate::MessageResponse) で返し、この型は使わない。
//!
//! ```json
//! { "status": 500, "message": "Internal server error", "error": "database" }
//! ```

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// `error` はエラー種別を表す短い識別子。内部情報は含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status:  u16,
    pub message: String,
    pub error:   String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: error.into(),
        }
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値。
    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new(500, "Internal server error", error)
    }
}
