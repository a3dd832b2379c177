use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{CreateTodoRequest, UpdateTodoRequest},
    services,
    store::TodoStore,
};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// Creates a to-do owned by the authenticated user.
///
/// ## Request Body:
/// - `task`: What needs doing (required, non-empty).
/// - `completed` (optional): Defaults to `false`.
///
/// ## Responses:
/// - `201 Created`: The new to-do.
/// - `400 Bad Request`: `task` missing or empty, or the body is not valid JSON.
/// - `401 Unauthorized`: Missing or invalid token.
pub async fn create_todo<S: TodoStore + 'static>(
    store: web::Data<S>,
    user: AuthenticatedUser,
    todo_data: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let new_todo = todo_data.into_inner().into_new_todo(user.id())?;
    let todo = services::todos::create_todo(store.get_ref(), new_todo).await?;

    Ok(HttpResponse::Created().json(todo))
}

/// Lists every to-do across all users.
pub async fn get_all_todos<S: TodoStore + 'static>(
    store: web::Data<S>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let todos = services::todos::get_all_todos(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Lists the authenticated user's to-dos.
pub async fn get_all_from_user<S: TodoStore + 'static>(
    store: web::Data<S>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let todos = services::todos::get_all_from_user(store.get_ref(), user.id()).await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Lists every to-do not yet completed, across all users.
pub async fn get_all_falses<S: TodoStore + 'static>(
    store: web::Data<S>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let todos = services::todos::get_all_falses(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Updates `task` and/or `completed` on one of the authenticated user's to-dos.
///
/// ## Path Parameters:
/// - `id`: The UUID of the to-do.
///
/// ## Responses:
/// - `200 OK`: The updated to-do.
/// - `400 Bad Request`: Malformed id, invalid JSON, or an empty `task`.
/// - `401 Unauthorized`: Missing or invalid token.
/// - `404 Not Found`: No to-do with that id owned by the user.
pub async fn modify_todo<S: TodoStore + 'static>(
    store: web::Data<S>,
    user: AuthenticatedUser,
    todo_id: web::Path<Uuid>,
    todo_data: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let changes = todo_data.into_inner().into_changes()?;
    let todo =
        services::todos::modify_todo(store.get_ref(), user.id(), todo_id.into_inner(), changes)
            .await?;

    Ok(HttpResponse::Ok().json(todo))
}
