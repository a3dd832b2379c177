use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{TodoStore, UserStore};
use crate::error::AppError;
use crate::models::{NewTodo, NewUser, Todo, TodoChanges, TodoFilter, User};

const TODO_COLUMNS: &str = "id, task, completed, added_at, owner_id";

/// PostgreSQL-backed store. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the `users` and `todos` tables if they are missing.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Waits for in-flight queries and closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)
             RETURNING id, name, email, password_hash",
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

impl TodoStore for PgStore {
    async fn insert_todo(&self, todo: NewTodo) -> Result<Todo, AppError> {
        let sql = format!(
            "INSERT INTO todos (task, completed, added_at, owner_id) VALUES ($1, $2, $3, $4)
             RETURNING {}",
            TODO_COLUMNS
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(todo.task)
            .bind(todo.completed)
            .bind(todo.added_at)
            .bind(todo.owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn list_todos(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        let mut sql = format!("SELECT {} FROM todos", TODO_COLUMNS);
        match filter {
            TodoFilter::All => {}
            TodoFilter::Owner(_) => sql.push_str(" WHERE owner_id = $1"),
            TodoFilter::Incomplete => sql.push_str(" WHERE completed = FALSE"),
        }
        sql.push_str(" ORDER BY added_at ASC, id ASC");

        let mut query = sqlx::query_as::<_, Todo>(&sql);
        if let TodoFilter::Owner(owner) = filter {
            query = query.bind(owner);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn find_todo(&self, id: Uuid) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {} FROM todos WHERE id = $1", TODO_COLUMNS);
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update_todo(&self, id: Uuid, changes: TodoChanges) -> Result<Option<Todo>, AppError> {
        // Single-row update; absent fields keep their stored value.
        let sql = format!(
            "UPDATE todos
             SET task = COALESCE($2, task), completed = COALESCE($3, completed)
             WHERE id = $1
             RETURNING {}",
            TODO_COLUMNS
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(changes.task)
            .bind(changes.completed)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
