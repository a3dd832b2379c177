use log::{info, warn};

use crate::auth::{Credentials, PasswordHasher, Registration, TokenKeys};
use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::store::UserStore;

/// Creates an account. The password is hashed before anything is written.
///
/// Fails with `AppError::Conflict` if the email is already registered. The store
/// enforces the same rule on insert, so a concurrent duplicate is rejected too.
pub async fn register<S: UserStore>(
    store: &S,
    hasher: &PasswordHasher,
    registration: Registration,
) -> Result<User, AppError> {
    if store.find_user_by_email(&registration.email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let password_hash = hasher.hash(registration.password).await?;
    let user = store
        .insert_user(NewUser {
            name: registration.name,
            email: registration.email,
            password_hash,
        })
        .await?;

    info!("registered user {}", user.id);
    Ok(user)
}

/// Checks credentials and issues a bearer token for the matching user.
///
/// Unknown email is `AppError::NotFound`; a wrong password is `AppError::Unauthorized`.
pub async fn login<S: UserStore>(
    store: &S,
    hasher: &PasswordHasher,
    keys: &TokenKeys,
    credentials: Credentials,
) -> Result<String, AppError> {
    let user = store
        .find_user_by_email(&credentials.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if !hasher
        .verify(credentials.password, user.password_hash.clone())
        .await?
    {
        warn!("failed login for user {}", user.id);
        return Err(AppError::Unauthorized("Invalid password".into()));
    }

    let token = keys.issue(user.id)?;
    info!("user {} logged in", user.id);
    Ok(token)
}
