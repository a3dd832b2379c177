#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use chrono::Duration;
use serde_json::{json, Value};
use todo_api::auth::{LoginResponse, PasswordHasher, TokenKeys};
use todo_api::routes;
use todo_api::store::{TodoStore, UserStore};

pub const SECRET: &str = "integration-test-secret";

pub fn token_keys() -> TokenKeys {
    TokenKeys::new(SECRET, Duration::hours(1))
}

/// Builds the full application around `store`, with a cheap bcrypt cost.
pub async fn init_app<S>(
    store: web::Data<S>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
where
    S: UserStore + TodoStore + 'static,
{
    test::init_service(
        App::new()
            .app_data(store)
            .app_data(web::Data::new(token_keys()))
            .app_data(web::Data::new(PasswordHasher::new(4)))
            .configure(routes::config::<S>),
    )
    .await
}

/// Sends a request and returns the status with the body parsed as JSON (`Null` if empty).
pub async fn send(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    req: Request,
) -> (StatusCode, Value) {
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!("response is not JSON: {}", String::from_utf8_lossy(&body))
        })
    };
    (status, json)
}

pub async fn register(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    name: &str,
    email: &str,
    password: &str,
) -> (StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": name, "email": email, "password": password }))
        .to_request();
    send(app, req).await
}

pub async fn login(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    email: &str,
    password: &str,
) -> (StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    send(app, req).await
}

/// Registers a user and returns a bearer token for them.
pub async fn register_and_login(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    name: &str,
    email: &str,
    password: &str,
) -> String {
    let (status, body) = register(app, name, email, password).await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);

    let (status, body) = login(app, email, password).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    let response: LoginResponse = serde_json::from_value(body).expect("login response");
    response.token
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
