use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account as stored in the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// bcrypt hash of the password. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// A user about to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
