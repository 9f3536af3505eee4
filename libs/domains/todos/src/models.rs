use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Rows returned by `list` when the caller does not ask for a positive limit.
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Todo priority levels. The discriminants are the values stored in the
/// `priority` column and sent on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(i16)]
pub enum Priority {
    #[default]
    Unspecified = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Unknown values collapse to `Unspecified` instead of failing the read.
impl From<i16> for Priority {
    fn from(value: i16) -> Self {
        match value {
            1 => Priority::Low,
            2 => Priority::Medium,
            3 => Priority::High,
            _ => Priority::Unspecified,
        }
    }
}

impl From<Priority> for i16 {
    fn from(priority: Priority) -> Self {
        priority as i16
    }
}

/// Current time at the precision Postgres stores.
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Todo entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    /// Empty when not provided
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    /// Empty when not provided
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Fresh, not yet persisted todo: new v4 id, both timestamps set to now.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        category: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = now_micros();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            completed: false,
            priority,
            category: category.into(),
            due_date: due_date.map(|d| d.trunc_subsecs(6)),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field. `id`, `created_at` and `updated_at` are left
    /// alone; the repository stamps `updated_at` when it writes.
    pub fn replace_with(&mut self, update: UpdateTodo) {
        self.title = update.title;
        self.description = update.description;
        self.completed = update.completed;
        self.priority = update.priority;
        self.category = update.category;
        self.due_date = update.due_date.map(|d| d.trunc_subsecs(6));
    }
}

impl From<CreateTodo> for Todo {
    fn from(input: CreateTodo) -> Self {
        Todo::new(
            input.title,
            input.description,
            input.priority,
            input.category,
            input.due_date,
        )
    }
}

/// DTO for creating a new todo
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// DTO for replacing every mutable field of an existing todo.
///
/// Not a patch: empty strings, `false` and `None` overwrite what is stored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Query filters for listing todos. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    /// Non-positive values fall back to [`DEFAULT_LIST_LIMIT`]
    #[serde(default)]
    pub limit: i64,
}

impl TodoFilter {
    pub fn effective_limit(&self) -> u64 {
        if self.limit > 0 {
            self.limit as u64
        } else {
            DEFAULT_LIST_LIMIT
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.completed.is_none_or(|c| todo.completed == c)
            && self.priority.is_none_or(|p| todo.priority == p)
            && self.category.as_deref().is_none_or(|c| todo.category == c)
    }
}
