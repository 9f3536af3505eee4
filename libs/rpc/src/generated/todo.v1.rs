// @generated
// This file is @generated by prost-build.
/// A single todo item.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Todo {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub description: ::prost::alloc::string::String,
    #[prost(bool, tag="4")]
    pub completed: bool,
    #[prost(enumeration="Priority", tag="5")]
    pub priority: i32,
    #[prost(string, tag="6")]
    pub category: ::prost::alloc::string::String,
    #[prost(message, optional, tag="7")]
    pub due_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag="8")]
    pub created_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag="9")]
    pub updated_at: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTodoRequest {
    #[prost(string, tag="1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub description: ::prost::alloc::string::String,
    #[prost(enumeration="Priority", tag="3")]
    pub priority: i32,
    #[prost(string, tag="4")]
    pub category: ::prost::alloc::string::String,
    #[prost(message, optional, tag="5")]
    pub due_date: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTodoResponse {
    #[prost(message, optional, tag="1")]
    pub todo: ::core::option::Option<Todo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodoRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodoResponse {
    #[prost(message, optional, tag="1")]
    pub todo: ::core::option::Option<Todo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListTodosRequest {
    /// Unset means "any completion state".
    #[prost(bool, optional, tag="1")]
    pub completed: ::core::option::Option<bool>,
    /// PRIORITY_UNSPECIFIED means "any priority".
    #[prost(enumeration="Priority", tag="2")]
    pub priority: i32,
    /// Empty means "any category".
    #[prost(string, tag="3")]
    pub category: ::prost::alloc::string::String,
    /// Values <= 0 fall back to the server default of 50.
    #[prost(int32, tag="4")]
    pub page_size: i32,
    /// Reserved for pagination, currently ignored.
    #[prost(string, tag="5")]
    pub page_token: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListTodosResponse {
    #[prost(message, repeated, tag="1")]
    pub todos: ::prost::alloc::vec::Vec<Todo>,
    /// Always empty, pagination is not implemented.
    #[prost(string, tag="2")]
    pub next_page_token: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateTodoRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub description: ::prost::alloc::string::String,
    #[prost(bool, tag="4")]
    pub completed: bool,
    #[prost(enumeration="Priority", tag="5")]
    pub priority: i32,
    #[prost(string, tag="6")]
    pub category: ::prost::alloc::string::String,
    /// Unset clears any stored due date.
    #[prost(message, optional, tag="7")]
    pub due_date: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateTodoResponse {
    #[prost(message, optional, tag="1")]
    pub todo: ::core::option::Option<Todo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTodoRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTodoResponse {
}
/// Priority of a todo item. PRIORITY_UNSPECIFIED doubles as "no filter" in ListTodos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Priority {
    Unspecified = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}
impl Priority {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "PRIORITY_UNSPECIFIED",
            Self::Low => "PRIORITY_LOW",
            Self::Medium => "PRIORITY_MEDIUM",
            Self::High => "PRIORITY_HIGH",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "PRIORITY_UNSPECIFIED" => Some(Self::Unspecified),
            "PRIORITY_LOW" => Some(Self::Low),
            "PRIORITY_MEDIUM" => Some(Self::Medium),
            "PRIORITY_HIGH" => Some(Self::High),
            _ => None,
        }
    }
}
include!("todo.v1.tonic.rs");
// @@protoc_insertion_point(module)
