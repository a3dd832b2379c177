pub mod auth;
pub mod health;
pub mod todos;

use actix_web::{error::JsonPayloadError, error::PathError, web, HttpRequest};

use crate::error::AppError;
use crate::store::{TodoStore, UserStore};

/// Registers every route for a store of type `S`.
///
/// The caller provides `web::Data<S>`, `web::Data<TokenKeys>` and
/// `web::Data<PasswordHasher>` as app data.
pub fn config<S>(cfg: &mut web::ServiceConfig)
where
    S: UserStore + TodoStore + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .route("/health", web::get().to(health::health::<S>))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register::<S>))
                .route("/login", web::post().to(auth::login::<S>)),
        )
        .service(
            web::scope("/todos")
                .wrap(crate::auth::AuthMiddleware)
                .route("", web::post().to(todos::create_todo::<S>))
                .route("", web::get().to(todos::get_all_todos::<S>))
                .route("/false", web::get().to(todos::get_all_falses::<S>))
                .route("/fromUser", web::get().to(todos::get_all_from_user::<S>))
                .route("/{id}", web::put().to(todos::modify_todo::<S>)),
        );
}

// Malformed bodies get the same `{"error": ...}` shape as every other failure.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}
