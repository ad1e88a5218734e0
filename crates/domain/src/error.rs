//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//! | `InvalidId` | 404 Not Found | ID として解釈できない値 |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// エンティティが見つからない
    ///
    /// `entity_type` にはエンティティの種類（"Todo" など）を指定する。
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// 識別子として解釈できない値
    ///
    /// パスパラメータなど外部入力から ID を復元できなかった場合に使用する。
    #[error("不正な ID です: {0}")]
    InvalidId(String),
}
