use log::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewTodo, Todo, TodoChanges, TodoFilter};
use crate::store::TodoStore;

pub async fn create_todo<S: TodoStore>(store: &S, todo: NewTodo) -> Result<Todo, AppError> {
    let todo = store.insert_todo(todo).await?;
    debug!("user {} created todo {}", todo.owner, todo.id);
    Ok(todo)
}

/// Every to-do in the system, whoever owns it.
pub async fn get_all_todos<S: TodoStore>(store: &S) -> Result<Vec<Todo>, AppError> {
    store.list_todos(TodoFilter::All).await
}

/// The to-dos owned by `principal`.
pub async fn get_all_from_user<S: TodoStore>(store: &S, principal: Uuid) -> Result<Vec<Todo>, AppError> {
    store.list_todos(TodoFilter::Owner(principal)).await
}

/// Every to-do not yet completed, whoever owns it.
pub async fn get_all_falses<S: TodoStore>(store: &S) -> Result<Vec<Todo>, AppError> {
    store.list_todos(TodoFilter::Incomplete).await
}

/// Applies a partial update to a to-do owned by `principal`.
///
/// A to-do that does not exist and one owned by someone else both yield
/// `AppError::NotFound`, so ids of other users' items are not disclosed.
/// An empty change set returns the stored record untouched.
pub async fn modify_todo<S: TodoStore>(
    store: &S,
    principal: Uuid,
    id: Uuid,
    changes: TodoChanges,
) -> Result<Todo, AppError> {
    let existing = store
        .find_todo(id)
        .await?
        .filter(|todo| todo.owner == principal)
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    if changes.is_empty() {
        return Ok(existing);
    }

    store
        .update_todo(id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))
}
