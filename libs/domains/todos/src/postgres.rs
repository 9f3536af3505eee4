use async_trait::async_trait;
use sea_orm::sea_query::{Index, PostgresQueryBuilder};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Schema, Select,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::{Todo, TodoFilter, now_micros},
    repository::TodoRepository,
};

const CREATED_AT_INDEX: &str = "idx_todos_created_at";

pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// SELECT with one equality predicate per supplied filter, newest first.
pub(crate) fn list_query(filter: &TodoFilter) -> Select<entity::Entity> {
    let mut query = entity::Entity::find();

    if let Some(completed) = filter.completed {
        query = query.filter(entity::Column::Completed.eq(completed));
    }

    if let Some(priority) = filter.priority {
        query = query.filter(entity::Column::Priority.eq(i16::from(priority)));
    }

    if let Some(category) = &filter.category {
        query = query.filter(entity::Column::Category.eq(category.as_str()));
    }

    query
        .order_by_desc(entity::Column::CreatedAt)
        .limit(filter.effective_limit())
}

/// `CREATE TABLE IF NOT EXISTS` and `CREATE INDEX IF NOT EXISTS`, in that order.
pub(crate) fn schema_statements(backend: DbBackend) -> [String; 2] {
    let mut table = Schema::new(backend).create_table_from_entity(entity::Entity);
    table.if_not_exists();

    let index = Index::create()
        .if_not_exists()
        .name(CREATED_AT_INDEX)
        .table(entity::Entity)
        .col(entity::Column::CreatedAt)
        .to_owned();

    [
        table.to_string(PostgresQueryBuilder),
        index.to_string(PostgresQueryBuilder),
    ]
}

fn storage_error(operation: &'static str) -> impl Fn(sea_orm::DbErr) -> TodoError {
    move |e| {
        error!(operation, error = %e, "Todo storage call failed");
        TodoError::from(e)
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, todo: Todo) -> TodoResult<Todo> {
        let active_model: entity::ActiveModel = todo.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(storage_error("create"))?;

        info!(todo_id = %model.id, "Created todo");
        model.try_into()
    }

    async fn get(&self, id: Uuid) -> TodoResult<Todo> {
        entity::Entity::find_by_id(id.hyphenated().to_string())
            .one(&self.db)
            .await
            .map_err(storage_error("get"))?
            .ok_or(TodoError::NotFound(id))?
            .try_into()
    }

    async fn list(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        let models = list_query(&filter)
            .all(&self.db)
            .await
            .map_err(storage_error("list"))?;

        models.into_iter().map(Todo::try_from).collect()
    }

    async fn update(&self, todo: Todo) -> TodoResult<()> {
        let id = todo.id;
        let changes = entity::ActiveModel::for_replace(todo, now_micros());

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id.hyphenated().to_string()))
            .exec(&self.db)
            .await
            .map_err(storage_error("update"))?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        info!(todo_id = %id, "Updated todo");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> TodoResult<()> {
        let result = entity::Entity::delete_by_id(id.hyphenated().to_string())
            .exec(&self.db)
            .await
            .map_err(storage_error("delete"))?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        info!(todo_id = %id, "Deleted todo");
        Ok(())
    }

    async fn ensure_schema(&self) -> TodoResult<()> {
        for statement in schema_statements(self.db.get_database_backend()) {
            self.db
                .execute_unprepared(&statement)
                .await
                .map_err(storage_error("ensure_schema"))?;
        }

        info!(table = "todos", "Schema ensured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use sea_orm::{MockDatabase, MockExecResult, QueryTrait};

    fn row(todo: &Todo) -> entity::Model {
        entity::Model {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            description: Some(todo.description.clone()),
            completed: todo.completed,
            priority: todo.priority.into(),
            category: Some(todo.category.clone()),
            due_date: todo.due_date.map(Into::into),
            created_at: todo.created_at.into(),
            updated_at: todo.updated_at.into(),
        }
    }

    fn no_rows() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }
    }

    #[test]
    fn test_list_query_without_filters() {
        let sql = list_query(&TodoFilter::default())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(!sql.contains("WHERE"), "{sql}");
        assert!(sql.contains(r#"ORDER BY "todos"."created_at" DESC"#), "{sql}");
        assert!(sql.ends_with("LIMIT 50"), "{sql}");
    }

    #[test]
    fn test_list_query_binds_every_supplied_filter() {
        let filter = TodoFilter {
            completed: Some(false),
            priority: Some(Priority::High),
            category: Some("errand".into()),
            limit: 5,
        };
        let stmt = list_query(&filter).build(DbBackend::Postgres);

        assert!(stmt.sql.contains(r#""todos"."completed" = $1"#), "{}", stmt.sql);
        assert!(stmt.sql.contains(r#""todos"."priority" = $2"#), "{}", stmt.sql);
        assert!(stmt.sql.contains(r#""todos"."category" = $3"#), "{}", stmt.sql);
        assert!(stmt.sql.contains("LIMIT $4"), "{}", stmt.sql);
        assert!(!stmt.sql.contains("errand"), "values must be bound, not inlined");
    }

    #[test]
    fn test_list_query_false_and_unspecified_are_real_filters() {
        let filter = TodoFilter {
            completed: Some(false),
            priority: Some(Priority::Unspecified),
            ..Default::default()
        };
        let sql = list_query(&filter).build(DbBackend::Postgres).to_string();

        assert!(sql.contains(r#""todos"."completed" = FALSE"#), "{sql}");
        assert!(sql.contains(r#""todos"."priority" = 0"#), "{sql}");
    }

    #[test]
    fn test_schema_statements() {
        let [table, index] = schema_statements(DbBackend::Postgres);

        assert!(table.starts_with(r#"CREATE TABLE IF NOT EXISTS "todos""#), "{table}");
        assert!(table.contains(r#""id" varchar(36)"#), "{table}");
        assert!(table.contains("PRIMARY KEY"), "{table}");
        assert!(table.contains(r#""priority" smallint"#), "{table}");
        assert!(table.contains(r#""due_date" timestamp with time zone"#), "{table}");
        assert!(index.starts_with("CREATE INDEX IF NOT EXISTS"), "{index}");
        assert!(index.contains(CREATED_AT_INDEX), "{index}");
    }

    #[tokio::test]
    async fn test_get_decodes_row() {
        let todo = Todo::new("Buy milk", "", Priority::Medium, "", None);
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![row(&todo)]])
            .into_connection();

        let repo = PgTodoRepository::new(db);
        assert_eq!(repo.get(todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let id = Uuid::new_v4();
        let err = PgTodoRepository::new(db).get(id).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_get_rejects_corrupt_id() {
        let todo = Todo::new("t", "", Priority::Low, "", None);
        let mut bad = row(&todo);
        bad.id = "not-a-uuid".into();

        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![bad]])
            .into_connection();

        let err = PgTodoRepository::new(db).get(todo.id).await.unwrap_err();
        assert!(matches!(err, TodoError::Internal(_)));
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let todo = Todo::new("Buy milk", "", Priority::Medium, "errand", None);
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![row(&todo)]])
            .into_connection();

        let repo = PgTodoRepository::new(db);
        assert_eq!(repo.create(todo.clone()).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([no_rows()])
            .into_connection();

        let todo = Todo::new("t", "", Priority::Low, "", None);
        let err = PgTodoRepository::new(db).update(todo.clone()).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(id) if id == todo.id));
    }

    #[tokio::test]
    async fn test_update_never_writes_id_or_created_at() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PgTodoRepository::new(db);
        repo.update(Todo::new("t", "", Priority::Low, "", None))
            .await
            .unwrap();

        let log = format!("{:?}", repo.db.clone().into_transaction_log());
        assert!(log.contains(r#"UPDATE \"todos\" SET"#), "{log}");
        assert!(log.contains(r#"\"updated_at\" = $"#), "{log}");
        assert!(!log.contains(r#"\"created_at\" = $"#), "{log}");
        assert!(!log.contains(r#"SET \"id\""#), "{log}");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([no_rows()])
            .into_connection();

        let err = PgTodoRepository::new(db)
            .delete(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_is_database_error() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".into())])
            .into_connection();

        let err = PgTodoRepository::new(db)
            .list(TodoFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Database(msg) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_ensure_schema_runs_both_statements() {
        let done = || MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        };
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([done(), done()])
            .into_connection();

        let repo = PgTodoRepository::new(db);
        repo.ensure_schema().await.unwrap();

        let log = repo.db.clone().into_transaction_log();
        assert_eq!(log.len(), 2);
    }
}
