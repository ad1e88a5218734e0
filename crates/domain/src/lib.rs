//! # Todo Audit ドメイン層
//!
//! Todo API のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`],
//!   [`request_log::RequestLog`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`todo::CompletedFlag`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//!       ↘                   ↑
//!        shared      (DB 非依存)
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`todo`] - Todo エンティティと完了フラグ
//! - [`request_log`] - リクエスト監査ログ
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層エラー
//!
//! ## 使用例
//!
//! ```rust
//! use todo_audit_domain::todo::CompletedFlag;
//!
//! let flag = CompletedFlag::from_form_value("1");
//! assert!(flag.is_completed());
//!
//! // 数値に変換できない値は 0（未完了）として扱う
//! let flag = CompletedFlag::from_form_value("yes");
//! assert_eq!(flag.as_i32(), 0);
//! ```

pub mod clock;
pub mod error;
pub mod request_log;
pub mod todo;

pub use error::DomainError;
