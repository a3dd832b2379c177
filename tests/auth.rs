mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web};
use pretty_assertions::assert_eq;
use serde_json::json;
use todo_api::store::MemoryStore;

use common::{bearer, init_app, login, register, send, token_keys};

#[actix_rt::test]
async fn test_register_and_login_flow() {
    let store = web::Data::new(MemoryStore::new());
    let app = init_app(store.clone()).await;

    let (status, body) = register(&app, "Alice", "a@x.com", "pw123").await;
    assert_eq!(status, StatusCode::CREATED, "Registration failed. Body: {}", body);
    assert!(body["message"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("token").is_none());
    assert_eq!(store.user_count().await, 1);

    // Same email again
    let (status, body) = register(&app, "Alice Again", "a@x.com", "other").await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "Duplicate registration. Body: {}", body);
    assert!(body["error"].is_string());
    assert_eq!(store.user_count().await, 1);

    let (status, body) = login(&app, "a@x.com", "pw123").await;
    assert_eq!(status, StatusCode::OK, "Login failed. Body: {}", body);
    let token = body["token"].as_str().expect("token in login response").to_string();
    assert!(!token.is_empty());

    // The token identifies the user that logged in: todos it creates are owned by its subject.
    let claims = token_keys().verify(&token).unwrap();
    let req = test::TestRequest::post()
        .uri("/todos")
        .insert_header(bearer(&token))
        .set_json(json!({ "task": "Task created by token test" }))
        .to_request();
    let (status, todo) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED, "Create todo failed. Body: {}", todo);
    assert_eq!(todo["owner"], claims.sub.to_string());
}

#[actix_rt::test]
async fn test_invalid_registration_inputs() {
    let store = web::Data::new(MemoryStore::new());
    let app = init_app(store.clone()).await;

    let test_cases = vec![
        (json!({ "email": "a@x.com", "password": "pw123" }), "missing name"),
        (json!({ "name": "Alice", "password": "pw123" }), "missing email"),
        (json!({ "name": "Alice", "email": "a@x.com" }), "missing password"),
        (json!({ "name": "", "email": "a@x.com", "password": "pw123" }), "empty name"),
        (json!({ "name": "Alice", "email": "", "password": "pw123" }), "empty email"),
        (json!({ "name": "Alice", "email": "a@x.com", "password": "" }), "empty password"),
        (json!({ "name": 42, "email": "a@x.com", "password": "pw123" }), "name not a string"),
    ];

    for (payload, description) in test_cases {
        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(&payload)
            .to_request();
        let (status, body) = send(&app, req).await;

        assert_eq!(
            status,
            StatusCode::BAD_REQUEST,
            "Test case failed: {}. Body: {}",
            description,
            body
        );
        assert!(body["error"].is_string(), "no error message for {}", description);
    }

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    assert_eq!(store.user_count().await, 0);
}

#[actix_rt::test]
async fn test_invalid_login_inputs() {
    let app = init_app(web::Data::new(MemoryStore::new())).await;

    let (status, _) = register(&app, "Login User", "login@x.com", "Password123!").await;
    assert_eq!(status, StatusCode::CREATED);

    let test_cases = vec![
        (json!({ "password": "Password123!" }), StatusCode::BAD_REQUEST, "missing email"),
        (json!({ "email": "login@x.com" }), StatusCode::BAD_REQUEST, "missing password"),
        (
            json!({ "email": "", "password": "Password123!" }),
            StatusCode::BAD_REQUEST,
            "empty email",
        ),
        (
            json!({ "email": "login@x.com", "password": "WrongPassword123!" }),
            StatusCode::UNAUTHORIZED,
            "incorrect password",
        ),
        (
            json!({ "email": "nobody@x.com", "password": "Password123!" }),
            StatusCode::NOT_FOUND,
            "non-existent user",
        ),
    ];

    for (payload, expected_status, description) in test_cases {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&payload)
            .to_request();
        let (status, body) = send(&app, req).await;

        assert_eq!(
            status, expected_status,
            "Test case failed: {}. Body: {}",
            description, body
        );
        assert!(body.get("token").is_none());
    }
}

#[actix_rt::test]
async fn test_health_is_public() {
    let app = init_app(web::Data::new(MemoryStore::new())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
