use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::debug;

use crate::auth::token::{Claims, TokenKeys};
use crate::error::AppError;

/// Rejects requests without a valid bearer token.
///
/// On success the decoded [`Claims`] are stored in the request extensions for the
/// [`AuthenticatedUser`](crate::auth::extractors::AuthenticatedUser) extractor.
/// Failures are answered with a 401 JSON body and never reach the wrapped service.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(app_err) => {
                debug!("rejected {} {}: {}", req.method(), req.path(), app_err);
                let response = req.into_response(app_err.error_response());
                Box::pin(async move { Ok(response.map_into_right_body()) })
            }
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, AppError> {
    let keys = req
        .app_data::<web::Data<TokenKeys>>()
        .ok_or_else(|| AppError::InternalServerError("Token keys are not configured".into()))?;

    let token = bearer_token(req)?;
    keys.verify(token)
}

fn bearer_token(req: &ServiceRequest) -> Result<&str, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Missing token".into()))?;

    value
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Malformed authorization header".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::extractors::AuthenticatedUser;
    use actix_web::{http::StatusCode, test, App, HttpResponse};
    use chrono::Duration;
    use uuid::Uuid;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.id().to_string())
    }

    fn keys() -> TokenKeys {
        TokenKeys::new("middleware-secret", Duration::hours(1))
    }

    #[actix_rt::test]
    async fn test_valid_token_reaches_handler() {
        let keys = keys();
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(keys))
                .service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, user_id.to_string().as_bytes());
    }

    #[actix_rt::test]
    async fn test_rejected_headers() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(keys()))
                .service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let foreign = TokenKeys::new("someone-else", Duration::hours(1))
            .issue(Uuid::new_v4())
            .unwrap();

        let cases = vec![
            (None, "missing header"),
            (Some("Basic dXNlcjpwYXNz".to_string()), "wrong scheme"),
            (Some("Bearer ".to_string()), "empty token"),
            (Some("Bearer not.a.jwt".to_string()), "garbage token"),
            (Some(format!("Bearer {}", foreign)), "foreign signature"),
        ];

        for (header_value, description) in cases {
            let mut req = test::TestRequest::get().uri("/me");
            if let Some(value) = header_value {
                req = req.insert_header((header::AUTHORIZATION, value));
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(
                resp.status(),
                StatusCode::UNAUTHORIZED,
                "case failed: {}",
                description
            );
        }
    }

    #[actix_rt::test]
    async fn test_missing_keys_is_server_error() {
        let app = test::init_service(
            App::new().service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, "Bearer abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
