//! # Todo Audit 共有ユーティリティ
//!
//! レスポンス形式とログ初期化など、サービス横断のユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各サービスの責務）

pub mod api_response;
pub mod error_response;
pub mod observability;

pub use api_response::{ApiResponse, CreatedResponse, MessageResponse};
pub use error_response::ErrorResponse;
