use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TodoError, TodoResult};
use crate::models::{Todo, TodoFilter, now_micros};

/// Repository trait for Todo persistence
///
/// Missing ids surface as [`TodoError::NotFound`] from `get`, `update` and `delete`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new todo and return the stored row
    async fn create(&self, todo: Todo) -> TodoResult<Todo>;

    /// Get a todo by ID
    async fn get(&self, id: Uuid) -> TodoResult<Todo>;

    /// List todos matching every supplied filter, newest first
    async fn list(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>>;

    /// Overwrite every mutable field of `todo` by id and refresh `updated_at`
    async fn update(&self, todo: Todo) -> TodoResult<()>;

    /// Delete a todo by ID
    async fn delete(&self, id: Uuid) -> TodoResult<()>;

    /// Create the backing storage if it does not exist yet
    async fn ensure_schema(&self) -> TodoResult<()>;
}

/// In-memory repository for tests and local experiments
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<HashMap<Uuid, Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: Todo) -> TodoResult<Todo> {
        let mut todos = self.todos.write().await;
        if todos.contains_key(&todo.id) {
            return Err(TodoError::Database(format!("duplicate key: {}", todo.id)));
        }
        todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: Uuid) -> TodoResult<Todo> {
        self.todos
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(TodoError::NotFound(id))
    }

    async fn list(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        let mut matching: Vec<Todo> = todos
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(filter.effective_limit() as usize);
        Ok(matching)
    }

    async fn update(&self, todo: Todo) -> TodoResult<()> {
        let mut todos = self.todos.write().await;
        let stored = todos.get_mut(&todo.id).ok_or(TodoError::NotFound(todo.id))?;

        let created_at = stored.created_at;
        *stored = Todo {
            created_at,
            updated_at: now_micros().max(created_at),
            ..todo
        };
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> TodoResult<()> {
        self.todos
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }

    async fn ensure_schema(&self) -> TodoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::Duration;

    #[tokio::test]
    async fn test_create_and_get_todo() {
        let repo = InMemoryTodoRepository::new();
        let todo = Todo::new("Buy milk", "2%", Priority::Medium, "errand", None);

        let created = repo.create(todo.clone()).await.unwrap();
        assert_eq!(created, todo);
        assert_eq!(repo.get(todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = InMemoryTodoRepository::new();
        let ghost = Todo::new("ghost", "", Priority::Low, "", None);

        assert!(matches!(repo.get(ghost.id).await, Err(TodoError::NotFound(_))));
        assert!(matches!(repo.update(ghost.clone()).await, Err(TodoError::NotFound(_))));
        assert!(matches!(repo.delete(ghost.id).await, Err(TodoError::NotFound(_))));
        assert!(repo.list(TodoFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo
            .create(Todo::new("t", "", Priority::Low, "", None))
            .await
            .unwrap();

        let mut changed = todo.clone();
        changed.completed = true;
        changed.created_at = todo.created_at - Duration::days(1);
        repo.update(changed).await.unwrap();

        let stored = repo.get(todo.id).await.unwrap();
        assert!(stored.completed);
        assert_eq!(stored.created_at, todo.created_at);
        assert!(stored.updated_at >= stored.created_at);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_and_limits() {
        let repo = InMemoryTodoRepository::new();
        for i in 0..60 {
            let mut todo = Todo::new(format!("todo {i}"), "", Priority::Low, "", None);
            todo.created_at += Duration::seconds(i);
            repo.create(todo).await.unwrap();
        }

        let listed = repo.list(TodoFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 50);
        assert_eq!(listed[0].title, "todo 59");
        test_utils::assertions::assert_descending(&listed, |t| t.created_at);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo
            .create(Todo::new("t", "", Priority::Low, "", None))
            .await
            .unwrap();

        repo.delete(todo.id).await.unwrap();
        assert!(matches!(repo.get(todo.id).await, Err(TodoError::NotFound(id)) if id == todo.id));
    }
}
