//! # ユースケース層
//!
//! Todo Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリはジェネリクスで外部から注入する
//! - **薄いハンドラ**: ハンドラは HTTP の入出力変換のみを担当する

pub mod todo;

pub use todo::{TodoInput, TodoUseCaseImpl};
