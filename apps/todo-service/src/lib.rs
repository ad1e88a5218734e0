//! # Todo Service ライブラリ
//!
//! Todo API のハンドラ・ユースケース・監査ログミドルウェアを公開する。
//! 統合テストからルーターを組み立てられるように lib として分けている。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: リクエスト監査ログ
//! - `usecase`: ビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;

pub use app_builder::build_app;
