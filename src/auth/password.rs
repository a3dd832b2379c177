use crate::error::AppError;
use bcrypt::{hash, verify};

/// bcrypt hashing with a configurable cost.
///
/// Hashing is CPU-bound, so both operations run on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
    }

    pub async fn verify(&self, password: String, hashed_password: String) -> Result<bool, AppError> {
        tokio::task::spawn_blocking(move || verify(password, &hashed_password))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
    }
}
