//! Todo gRPC Service
//!
//! CRUD over todo items, exposed as `todo.v1.TodoService`.
//!
//! ## Architecture
//!
//! ```text
//! Client (gRPC, or gRPC-Web over HTTP/1.1)
//!   ↓
//! TodoServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions via From/TryFrom in domain_todos::conversions)
//! TodoService (domain layer)
//!   ↓
//! PgTodoRepository (sea-orm)
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: Everything the binary reads from the environment
//! - `server`: Startup, layering, health and graceful shutdown
//! - `service`: gRPC handlers (TodoServiceImpl)

pub mod config;
pub mod server;
pub mod service;

pub use config::TodosConfig;
pub use server::run;
pub use service::TodoServiceImpl;
