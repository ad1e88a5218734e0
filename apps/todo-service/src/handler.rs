//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、ロジックはユースケースに委譲する

pub mod todo;

pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
