//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **整数フラグ**: `completed` は INTEGER のまま読み書きし、
//!   真偽値への変換は [`CompletedFlag`] に任せる
//! - **部分更新**: `COALESCE` で `None` のフィールドを元の値のまま残す
//! - **論理削除**: 削除は `deleted_at` を設定するだけで行は残す。
//!   `deleted_at` が設定された行は取得・更新・削除の対象外

use async_trait::async_trait;
use sqlx::PgPool;
use todo_audit_domain::todo::{CompletedFlag, NewTodo, Todo, TodoChanges, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番された ID を返す
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError>;

    /// すべての Todo を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// 指定したフィールドのみ更新する
    ///
    /// 対象行が存在した場合は `true` を返す。
    async fn update(&self, id: &TodoId, changes: &TodoChanges) -> Result<bool, InfraError>;

    /// Todo を論理削除する
    ///
    /// 未削除の対象行が存在した場合は `true` を返す。
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `todos` テーブルの行
#[derive(sqlx::FromRow)]
struct TodoRow {
    id:        i64,
    title:     String,
    completed: i32,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(
            TodoId::from_i64(row.id),
            row.title,
            CompletedFlag::from_db(row.completed),
        )
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO todos (title, completed)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&todo.title)
        .bind(todo.completed.as_i32())
        .fetch_one(&self.pool)
        .await?;

        Ok(TodoId::from_i64(id))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, completed
            FROM todos
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, completed
            FROM todos
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &TodoId, changes: &TodoChanges) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = COALESCE($2, title),
                completed = COALESCE($3, completed),
                updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .bind(changes.title.as_deref())
        .bind(changes.completed.map(|flag| flag.as_i32()))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET deleted_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTodoRepository>();
        assert_send_sync::<Box<dyn TodoRepository>>();
    }
}
