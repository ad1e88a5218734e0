//! # リポジトリ実装
//!
//! Todo と監査ログの永続化を提供する。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: ユースケース・ミドルウェアはトレイトにのみ依存
//! - **存在判定は `Option`**: ID のゼロ値を「見つからない」の印に使わない
//! - **テスタビリティ**: `mock` モジュールのインメモリ実装と差し替え可能

pub mod request_log_repository;
pub mod todo_repository;

pub use request_log_repository::{PostgresRequestLogRepository, RequestLogRepository};
pub use todo_repository::{PostgresTodoRepository, TodoRepository};
