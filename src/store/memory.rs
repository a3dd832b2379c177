use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{TodoStore, UserStore};
use crate::error::AppError;
use crate::models::{NewTodo, NewUser, Todo, TodoChanges, TodoFilter, User};

#[derive(Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    // Kept in insertion order, which is also `added_at` order.
    todos: Vec<Todo>,
}

/// Process-local store with the same semantics as [`super::PgStore`].
///
/// Data lives only as long as the process. Cloning shares the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn todo_count(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut collections = self.inner.write().await;
        if collections.users.values().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("User already exists".into()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        collections.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let collections = self.inner.read().await;
        Ok(collections
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

impl TodoStore for MemoryStore {
    async fn insert_todo(&self, todo: NewTodo) -> Result<Todo, AppError> {
        let mut collections = self.inner.write().await;
        if !collections.users.contains_key(&todo.owner) {
            return Err(AppError::NotFound("Owner not found".into()));
        }

        let todo = Todo {
            id: Uuid::new_v4(),
            task: todo.task,
            completed: todo.completed,
            added_at: todo.added_at,
            owner: todo.owner,
        };
        collections.todos.push(todo.clone());
        Ok(todo)
    }

    async fn list_todos(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        let collections = self.inner.read().await;
        Ok(collections
            .todos
            .iter()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect())
    }

    async fn find_todo(&self, id: Uuid) -> Result<Option<Todo>, AppError> {
        let collections = self.inner.read().await;
        Ok(collections.todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn update_todo(&self, id: Uuid, changes: TodoChanges) -> Result<Option<Todo>, AppError> {
        let mut collections = self.inner.write().await;
        match collections.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                changes.apply(todo);
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
