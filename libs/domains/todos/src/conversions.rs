//! Todo-specific proto ↔ domain conversions
//!
//! - `Priority` ↔ `todo.v1.Priority` (carried as `i32`)
//! - `Todo` ↔ `todo.v1.Todo`
//! - request messages → domain DTOs / filters
//!
//! Generic helpers (UUID strings, timestamps) come from `core_grpc::conversions`.
//! Conversion failures are `String`s so handlers can map them with `ToTonicResult`.

use core_grpc::conversions::{
    datetime_to_timestamp, opt_datetime_to_timestamp, opt_timestamp_to_datetime, parse_uuid,
    timestamp_to_datetime, uuid_to_string,
};
use prost_types::Timestamp;
use rpc::todo::v1 as pb;

use crate::models::{CreateTodo, Priority, Todo, TodoFilter, UpdateTodo};

// ============================================================================
// Priority Conversions
// ============================================================================

impl From<Priority> for pb::Priority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Unspecified => pb::Priority::Unspecified,
            Priority::Low => pb::Priority::Low,
            Priority::Medium => pb::Priority::Medium,
            Priority::High => pb::Priority::High,
        }
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        pb::Priority::from(priority) as i32
    }
}

/// Total: values outside the enum become `Unspecified`.
impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        match pb::Priority::try_from(value) {
            Ok(pb::Priority::Low) => Priority::Low,
            Ok(pb::Priority::Medium) => Priority::Medium,
            Ok(pb::Priority::High) => Priority::High,
            Ok(pb::Priority::Unspecified) | Err(_) => Priority::Unspecified,
        }
    }
}

// ============================================================================
// Entity Conversions
// ============================================================================

impl From<Todo> for pb::Todo {
    fn from(todo: Todo) -> Self {
        Self {
            id: uuid_to_string(todo.id),
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            priority: todo.priority.into(),
            category: todo.category,
            due_date: opt_datetime_to_timestamp(todo.due_date),
            created_at: Some(datetime_to_timestamp(todo.created_at)),
            updated_at: Some(datetime_to_timestamp(todo.updated_at)),
        }
    }
}

impl TryFrom<pb::Todo> for Todo {
    type Error = String;

    fn try_from(msg: pb::Todo) -> Result<Self, Self::Error> {
        let required = |ts: Option<&Timestamp>, field: &str| {
            ts.ok_or_else(|| format!("missing {field}"))
                .and_then(timestamp_to_datetime)
        };

        Ok(Self {
            id: parse_uuid(&msg.id)?,
            title: msg.title,
            description: msg.description,
            completed: msg.completed,
            priority: msg.priority.into(),
            category: msg.category,
            due_date: opt_timestamp_to_datetime(msg.due_date.as_ref())?,
            created_at: required(msg.created_at.as_ref(), "created_at")?,
            updated_at: required(msg.updated_at.as_ref(), "updated_at")?,
        })
    }
}

// ============================================================================
// Request Conversions
// ============================================================================

impl TryFrom<pb::CreateTodoRequest> for CreateTodo {
    type Error = String;

    fn try_from(req: pb::CreateTodoRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            priority: req.priority.into(),
            category: req.category,
            due_date: opt_timestamp_to_datetime(req.due_date.as_ref())?,
        })
    }
}

/// The `id` field is not part of the payload; handlers parse it separately
/// with `parse_uuid` before converting the rest.
impl TryFrom<pb::UpdateTodoRequest> for UpdateTodo {
    type Error = String;

    fn try_from(req: pb::UpdateTodoRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            completed: req.completed,
            priority: req.priority.into(),
            category: req.category,
            due_date: opt_timestamp_to_datetime(req.due_date.as_ref())?,
        })
    }
}

/// The wire's zero values (`PRIORITY_UNSPECIFIED`, `""`) mean "no filter".
impl From<pb::ListTodosRequest> for TodoFilter {
    fn from(req: pb::ListTodosRequest) -> Self {
        let priority = match Priority::from(req.priority) {
            Priority::Unspecified => None,
            other => Some(other),
        };

        Self {
            completed: req.completed,
            priority,
            category: Some(req.category).filter(|c| !c.is_empty()),
            limit: i64::from(req.page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn test_priority_wire_values() {
        assert_eq!(i32::from(Priority::Unspecified), 0);
        assert_eq!(i32::from(Priority::High), pb::Priority::High as i32);
        assert_eq!(Priority::from(2), Priority::Medium);
        assert_eq!(Priority::from(99), Priority::Unspecified);
        assert_eq!(Priority::from(-4), Priority::Unspecified);
    }

    #[test]
    fn test_todo_to_wire_is_lossless() {
        let due = Utc.timestamp_opt(1_900_000_000, 250_000_000).unwrap();
        let todo = Todo::new("Buy milk", "2%", Priority::Medium, "errand", Some(due));

        let wire = pb::Todo::from(todo.clone());
        assert_eq!(wire.id.len(), 36);
        assert_eq!(wire.priority, pb::Priority::Medium as i32);
        assert_eq!(wire.due_date.unwrap().nanos, 250_000_000);

        assert_eq!(Todo::try_from(wire).unwrap(), todo);
    }

    #[test]
    fn test_absent_due_date_stays_absent() {
        let todo = Todo::new("t", "", Priority::Unspecified, "", None);
        let wire = pb::Todo::from(todo);
        assert!(wire.due_date.is_none());
        assert_eq!(wire.priority, 0);
    }

    #[test]
    fn test_wire_todo_with_unknown_priority() {
        let mut wire = pb::Todo::from(Todo::new("t", "", Priority::Low, "", None));
        wire.priority = 17;
        assert_eq!(Todo::try_from(wire).unwrap().priority, Priority::Unspecified);
    }

    #[test]
    fn test_wire_todo_with_bad_id() {
        let mut wire = pb::Todo::from(Todo::new("t", "", Priority::Low, "", None));
        wire.id = "42".into();
        assert!(Todo::try_from(wire).is_err());
    }

    #[test]
    fn test_list_request_zero_values_mean_no_filter() {
        let filter = TodoFilter::from(pb::ListTodosRequest::default());
        assert_eq!(filter, TodoFilter::default());
        assert_eq!(filter.effective_limit(), crate::DEFAULT_LIST_LIMIT);
    }

    #[test]
    fn test_list_request_filters() {
        let filter = TodoFilter::from(pb::ListTodosRequest {
            completed: Some(false),
            priority: pb::Priority::High as i32,
            category: "errand".into(),
            page_size: 10,
            page_token: String::new(),
        });

        assert_eq!(filter.completed, Some(false));
        assert_eq!(filter.priority, Some(Priority::High));
        assert_eq!(filter.category.as_deref(), Some("errand"));
        assert_eq!(filter.limit, 10);
    }

    #[test]
    fn test_update_request_without_due_date_clears_it() {
        let update = UpdateTodo::try_from(pb::UpdateTodoRequest {
            id: Uuid::new_v4().to_string(),
            title: "t".into(),
            completed: true,
            priority: pb::Priority::Low as i32,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(update.title, "t");
        assert!(update.completed);
        assert_eq!(update.priority, Priority::Low);
        assert_eq!(update.due_date, None);
    }

    #[test]
    fn test_update_request_rejects_out_of_range_due_date() {
        let req = pb::UpdateTodoRequest {
            id: Uuid::new_v4().to_string(),
            title: "t".into(),
            due_date: Some(Timestamp {
                seconds: i64::MIN,
                nanos: 0,
            }),
            ..Default::default()
        };
        assert!(UpdateTodo::try_from(req).is_err());
    }

    #[test]
    fn test_create_request_rejects_out_of_range_due_date() {
        let req = pb::CreateTodoRequest {
            title: "t".into(),
            due_date: Some(Timestamp {
                seconds: i64::MAX,
                nanos: 0,
            }),
            ..Default::default()
        };
        assert!(CreateTodo::try_from(req).is_err());
    }
}
