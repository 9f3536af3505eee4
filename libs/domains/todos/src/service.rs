use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, TodoFilter, UpdateTodo};
use crate::repository::TodoRepository;

/// Handler-facing operations over a [`TodoRepository`]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create a new todo with validation
    #[instrument(skip(self, input), fields(todo_title = %input.title))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<Todo> {
        input.validate()?;

        self.repository.create(Todo::from(input)).await
    }

    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn get_todo(&self, id: Uuid) -> TodoResult<Todo> {
        self.repository.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_todos(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        self.repository.list(filter).await
    }

    /// Full replace. The existing row is read first so a missing id fails
    /// before any write, and re-read afterwards to return what was stored.
    #[instrument(skip(self, input), fields(todo_id = %id))]
    pub async fn update_todo(&self, id: Uuid, input: UpdateTodo) -> TodoResult<Todo> {
        input.validate()?;

        let mut todo = self.repository.get(id).await?;
        todo.replace_with(input);
        self.repository.update(todo).await?;

        self.repository.get(id).await
    }

    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn delete_todo(&self, id: Uuid) -> TodoResult<()> {
        self.repository.delete(id).await
    }
}
