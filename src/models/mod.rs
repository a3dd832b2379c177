pub mod todo;
pub mod user;

pub use todo::{CreateTodoRequest, NewTodo, Todo, TodoChanges, TodoFilter, UpdateTodoRequest};
pub use user::{NewUser, User};
