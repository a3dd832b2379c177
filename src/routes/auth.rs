use crate::{
    auth::{LoginRequest, LoginResponse, PasswordHasher, RegisterRequest, RegisterResponse, TokenKeys},
    error::AppError,
    services,
    store::UserStore,
};
use actix_web::{web, HttpResponse};

/// Register a new user
///
/// ## Responses:
/// - `201 Created`: `{"message": "..."}`. No user data or token is returned.
/// - `400 Bad Request`: A field is missing or empty, or the email is already registered.
pub async fn register<S: UserStore + 'static>(
    store: web::Data<S>,
    hasher: web::Data<PasswordHasher>,
    register_data: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let registration = register_data.into_inner().into_registration()?;
    services::auth::register(store.get_ref(), hasher.get_ref(), registration).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// Login user
///
/// ## Responses:
/// - `200 OK`: `{"token": "..."}`.
/// - `400 Bad Request`: Email or password missing.
/// - `401 Unauthorized`: Wrong password.
/// - `404 Not Found`: No user with that email.
pub async fn login<S: UserStore + 'static>(
    store: web::Data<S>,
    hasher: web::Data<PasswordHasher>,
    keys: web::Data<TokenKeys>,
    login_data: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let credentials = login_data.into_inner().into_credentials()?;
    let token =
        services::auth::login(store.get_ref(), hasher.get_ref(), keys.get_ref(), credentials).await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
