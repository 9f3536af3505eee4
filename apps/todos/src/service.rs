//! Todo gRPC service implementation
//!
//! Handlers stay thin: wire messages are decoded through the `From`/`TryFrom`
//! impls in `domain_todos::conversions`, domain errors become a `Status` through
//! `From<TodoError> for Status`.

use std::sync::Arc;

use core_grpc::ToTonicResult;
use core_grpc::conversions::parse_uuid;
use domain_todos::{CreateTodo, TodoFilter, TodoRepository, TodoService, UpdateTodo};
use rpc::todo::v1::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse, GetTodoRequest,
    GetTodoResponse, ListTodosRequest, ListTodosResponse, UpdateTodoRequest, UpdateTodoResponse,
    todo_service_server,
};
use tonic::{Request, Response, Status};
use tracing::info;

/// gRPC service implementation for todos
///
/// Generic over the repository type for testability.
pub struct TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    service: Arc<TodoService<R>>,
}

impl<R> TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    pub fn new(service: TodoService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<R> todo_service_server::TodoService for TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    async fn create_todo(
        &self,
        request: Request<CreateTodoRequest>,
    ) -> Result<Response<CreateTodoResponse>, Status> {
        let input: CreateTodo = request.into_inner().try_into().to_tonic()?;
        let todo = self.service.create_todo(input).await?;

        info!(todo_id = %todo.id, "Created todo");
        Ok(Response::new(CreateTodoResponse {
            todo: Some(todo.into()),
        }))
    }

    async fn get_todo(
        &self,
        request: Request<GetTodoRequest>,
    ) -> Result<Response<GetTodoResponse>, Status> {
        let id = parse_uuid(&request.into_inner().id).to_tonic()?;
        let todo = self.service.get_todo(id).await?;

        Ok(Response::new(GetTodoResponse {
            todo: Some(todo.into()),
        }))
    }

    async fn list_todos(
        &self,
        request: Request<ListTodosRequest>,
    ) -> Result<Response<ListTodosResponse>, Status> {
        let filter = TodoFilter::from(request.into_inner());
        let todos = self.service.list_todos(filter).await?;

        Ok(Response::new(ListTodosResponse {
            todos: todos.into_iter().map(Into::into).collect(),
            next_page_token: String::new(),
        }))
    }

    async fn update_todo(
        &self,
        request: Request<UpdateTodoRequest>,
    ) -> Result<Response<UpdateTodoResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id).to_tonic()?;
        let input: UpdateTodo = req.try_into().to_tonic()?;
        let todo = self.service.update_todo(id, input).await?;

        info!(todo_id = %id, "Updated todo");
        Ok(Response::new(UpdateTodoResponse {
            todo: Some(todo.into()),
        }))
    }

    async fn delete_todo(
        &self,
        request: Request<DeleteTodoRequest>,
    ) -> Result<Response<DeleteTodoResponse>, Status> {
        let id = parse_uuid(&request.into_inner().id).to_tonic()?;
        self.service.delete_todo(id).await?;

        info!(todo_id = %id, "Deleted todo");
        Ok(Response::new(DeleteTodoResponse {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain_todos::InMemoryTodoRepository;
    use rpc::todo::v1::Priority;
    use rpc::todo::v1::todo_service_server::TodoService as _;
    use tonic::Code;
    use uuid::Uuid;

    fn service() -> TodoServiceImpl<InMemoryTodoRepository> {
        TodoServiceImpl::new(TodoService::new(InMemoryTodoRepository::new()))
    }

    async fn create(
        svc: &TodoServiceImpl<InMemoryTodoRepository>,
        req: CreateTodoRequest,
    ) -> rpc::todo::v1::Todo {
        svc.create_todo(Request::new(req))
            .await
            .unwrap()
            .into_inner()
            .todo
            .unwrap()
    }

    fn buy_milk() -> CreateTodoRequest {
        CreateTodoRequest {
            title: "Buy milk".into(),
            priority: Priority::Medium as i32,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_buy_milk() {
        let svc = service();
        let todo = create(&svc, buy_milk()).await;

        assert!(Uuid::parse_str(&todo.id).is_ok());
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.priority, Priority::Medium as i32);
        assert!(todo.due_date.is_none());
        assert!(todo.created_at.is_some());
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[tokio::test]
    async fn test_create_then_get_is_equal() {
        let svc = service();
        let due = Utc.with_ymd_and_hms(2030, 1, 1, 9, 30, 0).unwrap();
        let created = create(
            &svc,
            CreateTodoRequest {
                title: "Dentist".into(),
                description: "6 month checkup".into(),
                priority: Priority::High as i32,
                category: "health".into(),
                due_date: Some(prost_types::Timestamp {
                    seconds: due.timestamp(),
                    nanos: 0,
                }),
            },
        )
        .await;

        let fetched = svc
            .get_todo(Request::new(GetTodoRequest {
                id: created.id.clone(),
            }))
            .await
            .unwrap()
            .into_inner()
            .todo
            .unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_empty_title_is_invalid_argument() {
        let svc = service();
        let status = svc
            .create_todo(Request::new(CreateTodoRequest::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_is_invalid_argument() {
        let status = service()
            .get_todo(Request::new(GetTodoRequest { id: "123".into() }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let status = service()
            .get_todo(Request::new(GetTodoRequest {
                id: Uuid::new_v4().to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_update_to_completed_and_unspecified() {
        let svc = service();
        let created = create(&svc, buy_milk()).await;

        let updated = svc
            .update_todo(Request::new(UpdateTodoRequest {
                id: created.id.clone(),
                title: "Buy milk".into(),
                completed: true,
                priority: Priority::Unspecified as i32,
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner()
            .todo
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.priority, Priority::Unspecified as i32);
        assert_eq!(updated.created_at, created.created_at);

        let created_at = created.created_at.unwrap();
        let updated_at = updated.updated_at.unwrap();
        assert!(
            (updated_at.seconds, updated_at.nanos) >= (created_at.seconds, created_at.nanos)
        );
    }

    #[tokio::test]
    async fn test_update_with_malformed_id_is_invalid_argument() {
        let svc = service();
        create(&svc, buy_milk()).await;

        let status = svc
            .update_todo(Request::new(UpdateTodoRequest {
                id: "nope".into(),
                title: "Buy milk".into(),
                ..Default::default()
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let status = service()
            .update_todo(Request::new(UpdateTodoRequest {
                id: Uuid::new_v4().to_string(),
                title: "ghost".into(),
                ..Default::default()
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();
        let created = create(&svc, buy_milk()).await;

        svc.delete_todo(Request::new(DeleteTodoRequest {
            id: created.id.clone(),
        }))
        .await
        .unwrap();

        let status = svc
            .get_todo(Request::new(GetTodoRequest { id: created.id.clone() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);

        let status = svc
            .delete_todo(Request::new(DeleteTodoRequest { id: created.id }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_list_filters_and_page_token() {
        let svc = service();
        let first = create(&svc, buy_milk()).await;
        create(
            &svc,
            CreateTodoRequest {
                title: "Walk dog".into(),
                category: "chores".into(),
                ..Default::default()
            },
        )
        .await;

        svc.update_todo(Request::new(UpdateTodoRequest {
            id: first.id.clone(),
            title: first.title.clone(),
            completed: true,
            priority: first.priority,
            ..Default::default()
        }))
        .await
        .unwrap();

        let all = svc
            .list_todos(Request::new(ListTodosRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(all.todos.len(), 2);
        assert!(all.next_page_token.is_empty());

        let open = svc
            .list_todos(Request::new(ListTodosRequest {
                completed: Some(false),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner()
            .todos;
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "Walk dog");

        let errands = svc
            .list_todos(Request::new(ListTodosRequest {
                category: "errand".into(),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner()
            .todos;
        assert!(errands.is_empty());

        let medium = svc
            .list_todos(Request::new(ListTodosRequest {
                priority: Priority::Medium as i32,
                page_size: 1,
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner()
            .todos;
        assert_eq!(medium.len(), 1);
        assert_eq!(medium[0].id, first.id);
    }
}
