//! # Todo
//!
//! タイトルと完了フラグを持つタスク。
//!
//! ## 完了フラグの表現
//!
//! 永続化層では整数（0/1）、API 層では真偽値として扱う。
//! 変換は [`CompletedFlag`] に集約し、真偽値がスキーマへ漏れないようにする。
//!
//! | 整数値 | 真偽値 |
//! |--------|--------|
//! | `1` | `true` |
//! | それ以外 | `false` |

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Todo の識別子
///
/// DB の `BIGSERIAL` が採番する単調増加の整数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// パスパラメータなどの文字列から ID を復元する
    ///
    /// 正の整数として解釈できない値は [`DomainError::InvalidId`] を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(DomainError::InvalidId(value.to_string())),
        }
    }
}

/// 完了フラグ（永続化形式の整数値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletedFlag(i32);

impl CompletedFlag {
    pub const INCOMPLETE: Self = Self(0);
    pub const COMPLETED: Self = Self(1);

    /// フォーム入力値から作成する
    ///
    /// 整数に変換できない値（空文字列を含む）は 0 として扱う。
    pub fn from_form_value(value: &str) -> Self {
        Self(value.parse().unwrap_or(0))
    }

    /// DB の値から復元する
    pub fn from_db(value: i32) -> Self {
        Self(value)
    }

    /// 永続化用の整数値
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// API レスポンス用の真偽値
    pub fn is_completed(&self) -> bool {
        self.0 == 1
    }
}

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:        TodoId,
    title:     String,
    completed: CompletedFlag,
}

impl Todo {
    /// DB から取得した値でエンティティを復元する
    pub fn from_db(id: TodoId, title: String, completed: CompletedFlag) -> Self {
        Self {
            id,
            title,
            completed,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> CompletedFlag {
        self.completed
    }

    /// 変更内容を適用した新しいインスタンスを返す
    ///
    /// `None` のフィールドは元の値を維持する。
    pub fn with_changes(self, changes: &TodoChanges) -> Self {
        Self {
            title: changes.title.clone().unwrap_or(self.title),
            completed: changes.completed.unwrap_or(self.completed),
            ..self
        }
    }
}

/// 新規作成する Todo の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title:     String,
    pub completed: CompletedFlag,
}

/// Todo の部分更新内容
///
/// フィールドごとに独立して更新する。`None` は「変更しない」を意味する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub title:     Option<String>,
    pub completed: Option<CompletedFlag>,
}

impl TodoChanges {
    /// 更新対象のフィールドが一つもないか
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", 1, true)]
    #[case("0", 0, false)]
    #[case("2", 2, false)]
    #[case("-1", -1, false)]
    #[case("", 0, false)]
    #[case("true", 0, false)]
    #[case("1.0", 0, false)]
    #[case("99999999999", 0, false)]
    fn test_from_form_valueは整数以外を0として扱う(
        #[case] input: &str,
        #[case] expected_int: i32,
        #[case] expected_bool: bool,
    ) {
        let flag = CompletedFlag::from_form_value(input);

        assert_eq!(flag.as_i32(), expected_int);
        assert_eq!(flag.is_completed(), expected_bool);
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case(" 42 ", Some(42))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn test_todo_id_parse(#[case] input: &str, #[case] expected: Option<i64>) {
        let result = TodoId::parse(input).ok().map(|id| id.as_i64());

        assert_eq!(result, expected);
    }

    #[test]
    fn test_todo_id_parseの失敗時は入力値を保持する() {
        let err = TodoId::parse("abc").unwrap_err();

        assert_eq!(err, DomainError::InvalidId("abc".to_string()));
    }

    #[test]
    fn test_with_changesは指定したフィールドのみ変更する() {
        let todo = Todo::from_db(
            TodoId::from_i64(7),
            "牛乳を買う".to_string(),
            CompletedFlag::INCOMPLETE,
        );

        let updated = todo.with_changes(&TodoChanges {
            title:     None,
            completed: Some(CompletedFlag::COMPLETED),
        });

        assert_eq!(updated.id(), TodoId::from_i64(7));
        assert_eq!(updated.title(), "牛乳を買う");
        assert!(updated.completed().is_completed());
    }

    #[test]
    fn test_todo_changesの空判定() {
        assert!(TodoChanges::default().is_empty());
        assert!(
            !TodoChanges {
                title:     Some(String::new()),
                completed: None,
            }
            .is_empty()
        );
    }
}
