//! # テスト用モックリポジトリ
//!
//! ハンドラ・ミドルウェアのテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-audit-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_audit_domain::{
    request_log::{NewRequestLog, RequestLog, RequestLogId},
    todo::{NewTodo, Todo, TodoChanges, TodoId},
};

use crate::{
    error::InfraError,
    repository::{RequestLogRepository, TodoRepository},
};

// ===== MockTodoRepository =====

#[derive(Default)]
struct TodoStore {
    todos:   Vec<Todo>,
    last_id: i64,
}

/// インメモリの TodoRepository
///
/// ID は DB と同様に 1 から単調増加で採番し、削除しても再利用しない。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    store: Arc<Mutex<TodoStore>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持している Todo のスナップショット
    pub fn todos(&self) -> Vec<Todo> {
        self.store.lock().unwrap().todos.clone()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError> {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let id = TodoId::from_i64(store.last_id);
        store
            .todos
            .push(Todo::from_db(id, todo.title.clone(), todo.completed));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.store.lock().unwrap().todos.clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .todos
            .iter()
            .find(|t| t.id() == *id)
            .cloned())
    }

    async fn update(&self, id: &TodoId, changes: &TodoChanges) -> Result<bool, InfraError> {
        let mut store = self.store.lock().unwrap();
        let Some(pos) = store.todos.iter().position(|t| t.id() == *id) else {
            return Ok(false);
        };
        let current = store.todos[pos].clone();
        store.todos[pos] = current.with_changes(changes);
        Ok(true)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let mut store = self.store.lock().unwrap();
        let before = store.todos.len();
        store.todos.retain(|t| t.id() != *id);
        Ok(store.todos.len() < before)
    }
}

// ===== FailingTodoRepository =====

/// すべての操作が DB エラーになる TodoRepository
///
/// ストレージ障害時のレスポンスと監査ログの検証に使う。
#[derive(Clone, Default)]
pub struct FailingTodoRepository;

impl FailingTodoRepository {
    fn unavailable() -> InfraError {
        InfraError::unexpected("todos テーブルに接続できません")
    }
}

#[async_trait]
impl TodoRepository for FailingTodoRepository {
    async fn insert(&self, _todo: &NewTodo) -> Result<TodoId, InfraError> {
        Err(Self::unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Err(Self::unavailable())
    }

    async fn find_by_id(&self, _id: &TodoId) -> Result<Option<Todo>, InfraError> {
        Err(Self::unavailable())
    }

    async fn update(&self, _id: &TodoId, _changes: &TodoChanges) -> Result<bool, InfraError> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _id: &TodoId) -> Result<bool, InfraError> {
        Err(Self::unavailable())
    }
}

// ===== MockRequestLogRepository =====

/// インメモリの RequestLogRepository
///
/// 記録されたログを [`logs`](Self::logs) で検証できる。
#[derive(Clone, Default)]
pub struct MockRequestLogRepository {
    logs: Arc<Mutex<Vec<RequestLog>>>,
}

impl MockRequestLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの監査ログ（挿入順）
    pub fn logs(&self) -> Vec<RequestLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestLogRepository for MockRequestLogRepository {
    async fn insert(&self, log: &NewRequestLog) -> Result<RequestLogId, InfraError> {
        let mut logs = self.logs.lock().unwrap();
        let id = RequestLogId::from_i64(logs.len() as i64 + 1);
        logs.push(RequestLog {
            id,
            entry: log.clone(),
        });
        Ok(id)
    }
}

// ===== FailingRequestLogRepository =====

/// 常に書き込みに失敗する RequestLogRepository
///
/// 監査ログの書き込み失敗がレスポンスに影響しないことの検証に使う。
#[derive(Clone, Default)]
pub struct FailingRequestLogRepository;

#[async_trait]
impl RequestLogRepository for FailingRequestLogRepository {
    async fn insert(&self, _log: &NewRequestLog) -> Result<RequestLogId, InfraError> {
        Err(InfraError::unexpected("request_logs への書き込みに失敗"))
    }
}

#[cfg(test)]
mod tests {
    use todo_audit_domain::todo::CompletedFlag;

    use super::*;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title:     title.to_string(),
            completed: CompletedFlag::INCOMPLETE,
        }
    }

    #[tokio::test]
    async fn test_削除したidは再利用されない() {
        let repo = MockTodoRepository::new();

        let first = repo.insert(&new_todo("a")).await.unwrap();
        assert!(repo.delete(&first).await.unwrap());
        let second = repo.insert(&new_todo("b")).await.unwrap();

        assert_eq!(first.as_i64(), 1);
        assert_eq!(second.as_i64(), 2);
    }

    #[tokio::test]
    async fn test_存在しないidの更新と削除はfalseを返す() {
        let repo = MockTodoRepository::new();
        let missing = TodoId::from_i64(99);

        assert!(
            !repo
                .update(&missing, &TodoChanges::default())
                .await
                .unwrap()
        );
        assert!(!repo.delete(&missing).await.unwrap());
    }

    #[tokio::test]
    async fn test_failing_todo_repositoryはすべての操作でエラーを返す() {
        let repo = FailingTodoRepository;
        let id = TodoId::from_i64(1);

        assert!(repo.insert(&new_todo("a")).await.is_err());
        assert!(repo.find_all().await.is_err());
        assert!(repo.find_by_id(&id).await.is_err());
        assert!(repo.update(&id, &TodoChanges::default()).await.is_err());
        assert!(repo.delete(&id).await.is_err());
    }
}
