pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::PasswordHasher;
pub use token::{Claims, TokenKeys};

/// Body of `POST /auth/register`.
///
/// Fields are optional at the JSON level so that a missing field is reported as a
/// validation error rather than a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
    /// Email address, unique across users.
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,
    /// Plain-text password. Only its hash is stored.
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,
}

/// A registration whose fields are all present.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login credentials whose fields are all present.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Result<Registration, AppError> {
        self.validate()?;
        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) => Ok(Registration {
                name,
                email,
                password,
            }),
            _ => Err(AppError::ValidationError(
                "name, email and password are required".into(),
            )),
        }
    }
}

impl LoginRequest {
    pub fn into_credentials(self) -> Result<Credentials, AppError> {
        self.validate()?;
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            _ => Err(AppError::ValidationError(
                "email and password are required".into(),
            )),
        }
    }
}

/// Response to a successful registration. Deliberately carries no user data.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Response to a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to send as `Authorization: Bearer <token>`.
    pub token: String,
}
