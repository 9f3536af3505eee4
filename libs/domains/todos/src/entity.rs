use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::error::TodoError;
use crate::models::{Priority, Todo};

/// Sea-ORM Entity for the `todos` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(36))"
    )]
    pub id: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(default_value = false)]
    pub completed: bool,
    #[sea_orm(default_value = 0)]
    pub priority: i16,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub category: Option<String>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows are only rejected when the id column is not a UUID; NULL text columns
/// read back as empty strings and unknown priorities as `Unspecified`.
impl TryFrom<Model> for Todo {
    type Error = TodoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&model.id).map_err(|e| {
            TodoError::Internal(format!("stored id '{}' is not a UUID: {}", model.id, e))
        })?;

        Ok(Self {
            id,
            title: model.title,
            description: model.description.unwrap_or_default(),
            completed: model.completed,
            priority: Priority::from(model.priority),
            category: model.category.unwrap_or_default(),
            due_date: model.due_date.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Full row for INSERT.
impl From<Todo> for ActiveModel {
    fn from(todo: Todo) -> Self {
        ActiveModel {
            id: Set(todo.id.hyphenated().to_string()),
            title: Set(todo.title),
            description: Set(Some(todo.description)),
            completed: Set(todo.completed),
            priority: Set(todo.priority.into()),
            category: Set(Some(todo.category)),
            due_date: Set(todo.due_date.map(Into::into)),
            created_at: Set(todo.created_at.into()),
            updated_at: Set(todo.updated_at.into()),
        }
    }
}

impl ActiveModel {
    /// Mutable columns only, for `UPDATE ... WHERE id = $n`. `id` and
    /// `created_at` stay `NotSet` so they can never be rewritten.
    ///
    /// `updated_at` is clamped to the stored `created_at` so a clock step
    /// backwards cannot make it earlier.
    pub fn for_replace(todo: Todo, now: chrono::DateTime<chrono::Utc>) -> Self {
        let updated_at = now.max(todo.created_at);
        ActiveModel {
            id: NotSet,
            created_at: NotSet,
            updated_at: Set(updated_at.into()),
            ..ActiveModel::from(todo)
        }
    }
}
