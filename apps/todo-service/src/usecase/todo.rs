//! # Todo ユースケース
//!
//! Todo の作成・取得・更新・削除を実装する。
//!
//! 存在確認はリポジトリの `Option` で判定し、見つからない場合は
//! [`CoreError::NotFound`] を返す。一覧が空の場合も NotFound として扱う。

use todo_audit_domain::{
    DomainError,
    todo::{CompletedFlag, NewTodo, Todo, TodoChanges, TodoId},
};
use todo_audit_infra::repository::TodoRepository;

use crate::error::CoreError;

/// フォームから受け取った入力
///
/// どちらのフィールドも省略可能。`completed` は文字列のまま受け取り、
/// 整数に変換できない値は 0 として扱う。
///
/// PostgreSQL の TEXT は NUL 文字を格納できないため、タイトル中の NUL は取り除く。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoInput {
    pub title:     Option<String>,
    pub completed: Option<String>,
}

impl TodoInput {
    /// 作成用の値に変換する（省略されたタイトルは空文字列）
    fn into_new_todo(self) -> NewTodo {
        NewTodo {
            title:     self.title.as_deref().map(strip_nul).unwrap_or_default(),
            completed: CompletedFlag::from_form_value(self.completed.as_deref().unwrap_or_default()),
        }
    }

    /// 更新用の値に変換する（省略されたフィールドは変更しない）
    fn into_changes(self) -> TodoChanges {
        TodoChanges {
            title:     self.title.as_deref().map(strip_nul),
            completed: self
                .completed
                .as_deref()
                .map(CompletedFlag::from_form_value),
        }
    }
}

fn strip_nul(value: &str) -> String {
    value.replace('\0', "")
}

/// Todo ユースケース実装
pub struct TodoUseCaseImpl<R> {
    todo_repo: R,
}

impl<R> TodoUseCaseImpl<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: R) -> Self {
        Self { todo_repo }
    }

    /// Todo を作成し、採番された ID を返す
    pub async fn create_todo(&self, input: TodoInput) -> Result<TodoId, CoreError> {
        let id = self.todo_repo.insert(&input.into_new_todo()).await?;
        tracing::info!(todo_id = %id, "Todo を作成しました");
        Ok(id)
    }

    /// すべての Todo を取得する
    ///
    /// 1 件も無い場合は NotFound を返す。
    pub async fn list_todos(&self) -> Result<Vec<Todo>, CoreError> {
        let todos = self.todo_repo.find_all().await?;
        if todos.is_empty() {
            return Err(CoreError::NotFound("Todo が 1 件もありません".to_string()));
        }
        Ok(todos)
    }

    /// ID で Todo を取得する
    ///
    /// `raw_id` はパスパラメータの文字列。ID として解釈できない値も NotFound になる。
    pub async fn get_todo(&self, raw_id: &str) -> Result<Todo, CoreError> {
        let id = TodoId::parse(raw_id)?;
        self.find_existing(&id).await
    }

    /// 入力されたフィールドのみ更新する
    ///
    /// 更新対象のフィールドが無い場合は存在確認だけを行う。
    pub async fn update_todo(&self, raw_id: &str, input: TodoInput) -> Result<(), CoreError> {
        let id = TodoId::parse(raw_id)?;
        self.find_existing(&id).await?;

        let changes = input.into_changes();
        if changes.is_empty() {
            tracing::debug!(todo_id = %id, "更新対象のフィールドがありません");
            return Ok(());
        }

        // 確認後に別リクエストで削除された場合
        if !self.todo_repo.update(&id, &changes).await? {
            return Err(not_found(&id));
        }
        tracing::info!(todo_id = %id, "Todo を更新しました");
        Ok(())
    }

    /// Todo を削除する
    pub async fn delete_todo(&self, raw_id: &str) -> Result<(), CoreError> {
        let id = TodoId::parse(raw_id)?;
        self.find_existing(&id).await?;

        if !self.todo_repo.delete(&id).await? {
            return Err(not_found(&id));
        }
        tracing::info!(todo_id = %id, "Todo を削除しました");
        Ok(())
    }

    async fn find_existing(&self, id: &TodoId) -> Result<Todo, CoreError> {
        self.todo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &TodoId) -> CoreError {
    DomainError::NotFound {
        entity_type: "Todo",
        id:          id.to_string(),
    }
    .into()
}
