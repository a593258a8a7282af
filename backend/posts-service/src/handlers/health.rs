/// Service root and health endpoints
use crate::services::PostStore;
use actix_web::{web, HttpResponse};
use std::time::Instant;

/// GET /
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(
        "<h2>Posts API</h2>\n<p>Welcome to the Posts API. Posts live under /api/posts.</p>\n",
    )
}

/// GET /api/health - storage round-trip
pub async fn health_summary(posts: web::Data<PostStore>) -> HttpResponse {
    let start = Instant::now();
    match posts.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "posts-service",
            "version": env!("CARGO_PKG_VERSION"),
            "latency_ms": start.elapsed().as_millis() as u64,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "service": "posts-service",
                "diagnostic": "storage_unavailable",
            }))
        }
    }
}

/// GET /api/health/live
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
