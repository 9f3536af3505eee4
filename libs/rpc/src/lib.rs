//! Wire types for the todo API.
//!
//! Everything under `generated/` is produced by `buf generate` from
//! `proto/todo/v1/todo.proto` and checked in. Do not edit it by hand.

mod generated;

pub use generated::*;
