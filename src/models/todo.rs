use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// A to-do item as stored in the `todos` table and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned by the store.
    pub id: Uuid,
    /// What needs doing. Never empty.
    pub task: String,
    /// Whether the item has been done.
    pub completed: bool,
    /// When the item was created.
    pub added_at: DateTime<Utc>,
    /// Id of the user who created the item.
    #[sqlx(rename = "owner_id")]
    pub owner: Uuid,
}

/// A validated to-do about to be inserted.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
    pub added_at: DateTime<Utc>,
    pub owner: Uuid,
}

impl NewTodo {
    /// Builds an item owned by `owner`, stamped with the current time.
    pub fn new(task: String, completed: bool, owner: Uuid) -> Self {
        Self {
            task,
            completed,
            added_at: Utc::now(),
            owner,
        }
    }
}

/// Fields to overwrite on an existing to-do. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

impl TodoChanges {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.completed.is_none()
    }

    /// Applies the changes to `todo` in place.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(task) = self.task {
            todo.task = task;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Body of `POST /todos`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(
        required(message = "task is required"),
        length(min = 1, message = "task must not be empty")
    )]
    pub task: Option<String>,
    /// Defaults to `false`.
    pub completed: Option<bool>,
}

impl CreateTodoRequest {
    /// Validates the body and builds an item owned by `owner`.
    pub fn into_new_todo(self, owner: Uuid) -> Result<NewTodo, AppError> {
        self.validate()?;
        let task = self
            .task
            .ok_or_else(|| AppError::ValidationError("task is required".into()))?;
        Ok(NewTodo::new(task, self.completed.unwrap_or(false), owner))
    }
}

/// Body of `PUT /todos/{id}`. Both fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "task must not be empty"))]
    pub task: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    pub fn into_changes(self) -> Result<TodoChanges, AppError> {
        self.validate()?;
        Ok(TodoChanges {
            task: self.task,
            completed: self.completed,
        })
    }
}

/// Which to-dos a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    /// Every to-do, regardless of owner.
    All,
    /// Only the to-dos created by this user.
    Owner(Uuid),
    /// Only to-dos not yet completed, regardless of owner.
    Incomplete,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Owner(owner) => todo.owner == *owner,
            TodoFilter::Incomplete => !todo.completed,
        }
    }
}
