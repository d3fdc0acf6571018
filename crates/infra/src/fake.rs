//! # テスト用フェイクリポジトリ
//!
//! ハンドラ・シナリオテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID は SQLite の `AUTOINCREMENT` と同じく 1 から採番し、削除後も再利用しない。

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use todo_domain::todo::{Todo, TodoDraft, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

#[derive(Debug, Default)]
struct FakeTable {
    rows:    BTreeMap<TodoId, Todo>,
    last_id: i64,
}

/// インメモリの TodoRepository
#[derive(Debug, Clone, Default)]
pub struct FakeTodoRepository {
    table: Arc<Mutex<FakeTable>>,
}

impl FakeTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在保存されている件数を返す
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TodoRepository for FakeTodoRepository {
    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, InfraError> {
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let id = TodoId::from_i64(table.last_id);
        table.rows.insert(id, Todo::from_draft(id, draft.clone()));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<bool, InfraError> {
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Todo::from_draft(id, draft.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let mut table = self.table.lock().unwrap();
        let Some(row) = table.rows.remove(&id) else {
            return Ok(None);
        };
        let toggled = row.toggled();
        table.rows.insert(id, toggled.clone());
        Ok(Some(toggled))
    }

    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self.table.lock().unwrap().rows.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_削除したidは再利用されない() {
        let sut = FakeTodoRepository::new();
        let draft = TodoDraft::new("buy milk", false).unwrap();

        let first = sut.insert(&draft).await.unwrap();
        sut.delete(first).await.unwrap();
        let second = sut.insert(&draft).await.unwrap();

        assert_eq!(first, TodoId::from_i64(1));
        assert_eq!(second, TodoId::from_i64(2));
        assert_eq!(sut.len(), 1);
    }

    #[tokio::test]
    async fn test_存在しないidの更新はfalseを返す() {
        let sut = FakeTodoRepository::new();
        let draft = TodoDraft::new("buy milk", false).unwrap();

        let updated = sut.update(TodoId::from_i64(9), &draft).await.unwrap();

        assert!(!updated);
        assert!(sut.is_empty());
    }
}
