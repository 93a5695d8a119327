//! In-memory document store
//!
//! Holds the `todos` collection in a map behind an async `RwLock`. Every
//! scan sorts the filtered documents, which is fine for fixtures and the CLI
//! but not meant for large collections.

use super::types::{DocumentStore, Filter, ScanQuery};
use crate::error::Result;
use crate::sort::SortSpec;
use crate::types::{DocId, NewTodo, Todo, TodoPatch};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory `todos` collection
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<HashMap<DocId, Todo>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with documents, keyed by their ids
    pub fn from_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos = todos
            .into_iter()
            .map(|todo| (todo.id.clone(), todo))
            .collect();
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }

    /// Insert or replace a document as-is
    pub async fn insert(&self, todo: Todo) {
        self.todos.write().await.insert(todo.id.clone(), todo);
    }

    /// Create a todo for a shop, returning the new document id
    ///
    /// Both timestamps are set to the current time.
    pub async fn add_todo(&self, shop_id: &str, data: NewTodo) -> DocId {
        let now = Utc::now();
        let todo = Todo {
            id: uuid::Uuid::new_v4().simple().to_string(),
            shop_id: shop_id.to_string(),
            title: data.title,
            is_completed: data.is_completed,
            created_at: now,
            updated_at: now,
        };
        let id = todo.id.clone();
        tracing::debug!("Created todo {} for shop {}", id, shop_id);
        self.insert(todo).await;
        id
    }

    /// Apply a patch to an existing todo
    ///
    /// Returns the updated document, or `None` if no document has this id.
    pub async fn edit_todo(&self, id: &str, patch: TodoPatch) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(id)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(is_completed) = patch.is_completed {
            todo.is_completed = is_completed;
        }
        todo.updated_at = Utc::now();

        Some(todo.clone())
    }

    /// Delete a todo by id
    ///
    /// Returns the deleted id, or `None` if the document did not exist.
    pub async fn delete_todo(&self, id: &str) -> Option<DocId> {
        let removed = self.todos.write().await.remove(id)?;
        tracing::debug!("Deleted todo {}", removed.id);
        Some(removed.id)
    }

    /// All todos of a shop, newest first
    pub async fn todos_by_shop(&self, shop_id: &str) -> Vec<Todo> {
        let filter = Filter::for_shop(shop_id);
        let sort = SortSpec::default();
        let todos = self.todos.read().await;

        let mut matching: Vec<Todo> = todos
            .values()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect();
        matching.sort_by(|a, b| sort.compare(&a.sort_key(sort.field), &b.sort_key(sort.field)));
        matching
    }

    /// Number of documents in the store
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn scan(&self, query: &ScanQuery) -> Result<Vec<Todo>> {
        let field = query.sort.field;
        let todos = self.todos.read().await;

        let mut matching: Vec<&Todo> = todos
            .values()
            .filter(|todo| query.filter.matches(todo) && query.is_past_start(todo))
            .collect();
        matching.sort_by(|a, b| query.sort.compare(&a.sort_key(field), &b.sort_key(field)));

        Ok(matching
            .into_iter()
            .take(query.limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Todo>> {
        Ok(self.todos.read().await.get(id).cloned())
    }
}
