//! # ミドルウェア
//!
//! Todo Service 用のミドルウェアを提供する。

pub mod request_log;

pub use request_log::{RequestLogState, record_request_log};
