//! Todos Domain
//!
//! Everything the todo service needs below the transport layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Validation, get-before-update, re-read after write
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo, Priority, DTOs, filters
//! └─────────────┘
//! ```
//!
//! `conversions` maps the models to and from the `todo.v1` wire messages and
//! `error` maps [`TodoError`] onto gRPC status codes.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{PgTodoRepository, TodoRepository, TodoService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let repository = PgTodoRepository::new(db);
//! repository.ensure_schema().await?;
//! let service = TodoService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use models::{CreateTodo, DEFAULT_LIST_LIMIT, Priority, Todo, TodoFilter, UpdateTodo};
pub use postgres::PgTodoRepository;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;
