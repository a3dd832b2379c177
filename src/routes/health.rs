use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::error;
use serde_json::json;

use crate::store::TodoStore;

/// Health check endpoint
///
/// Reports whether the store answers, with the current timestamp.
/// Responds `503 Service Unavailable` when it does not.
pub async fn health<S: TodoStore + 'static>(store: web::Data<S>) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "database": "up",
            "timestamp": Utc::now()
        })),
        Err(e) => {
            error!("health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "error",
                "database": "down",
                "timestamp": Utc::now()
            }))
        }
    }
}
