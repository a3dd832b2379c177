//! Persistence for users and to-dos.
//!
//! Handlers and services are generic over these traits, so the same code runs
//! against PostgreSQL ([`PgStore`]) in production and against [`MemoryStore`]
//! when no database is configured and in tests.

pub mod memory;
pub mod postgres;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewTodo, NewUser, Todo, TodoChanges, TodoFilter, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// The credential store.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    /// Inserts a user. Fails with `AppError::Conflict` if the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

/// The to-do store.
#[allow(async_fn_in_trait)]
pub trait TodoStore {
    /// Inserts a to-do. Fails with `AppError::NotFound` if the owner does not exist.
    async fn insert_todo(&self, todo: NewTodo) -> Result<Todo, AppError>;

    /// Lists the to-dos selected by `filter`, oldest first.
    async fn list_todos(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError>;

    async fn find_todo(&self, id: Uuid) -> Result<Option<Todo>, AppError>;

    /// Applies `changes` to a single to-do. Returns `None` if no to-do has that id.
    async fn update_todo(&self, id: Uuid, changes: TodoChanges) -> Result<Option<Todo>, AppError>;

    /// Checks that the backing storage is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
