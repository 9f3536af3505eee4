use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl From<sea_orm::DbErr> for TodoError {
    fn from(err: sea_orm::DbErr) -> Self {
        TodoError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for TodoError {
    fn from(err: validator::ValidationErrors) -> Self {
        TodoError::Validation(err.to_string())
    }
}

/// Storage and internal failures never reach the caller verbatim: they are
/// logged here and replaced by an opaque message.
impl From<TodoError> for tonic::Status {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => tonic::Status::not_found(format!("todo {id} not found")),
            TodoError::Validation(msg) => tonic::Status::invalid_argument(msg),
            TodoError::Database(msg) | TodoError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                tonic::Status::internal("internal error")
            }
        }
    }
}
