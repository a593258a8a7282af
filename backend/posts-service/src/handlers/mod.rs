/// HTTP handlers for posts-service
///
/// This module contains handlers for:
/// - Posts: list, read, create, replace, delete
/// - Comments: create and read comments nested under a post
/// - Health: storage readiness and liveness
/// - Metrics: Prometheus text exposition
pub mod comments;
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{create_comment, get_comment, get_post_comments};
pub use health::{health_summary, liveness_check, welcome};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};

use crate::metrics::serve_metrics;
use actix_web::web;
use serde_json::Value;
use uuid::Uuid;

/// Parse a path id. Anything that is not a UUID maps to the nil UUID, which
/// no stored record ever carries, so lookups report it as not found.
pub(crate) fn parse_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or(Uuid::nil())
}

/// Decode a request body into untyped JSON. Empty or malformed bodies become
/// `Null` and are rejected by validation, after any parent lookup.
pub(crate) fn payload(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Route table for the posts API.
///
/// Handlers expect `web::Data<PostStore>`, `web::Data<CommentStore>` and
/// `web::Data<ResponseConfig>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/api/health", web::get().to(health_summary))
        .route("/api/health/live", web::get().to(liveness_check))
        .route("/metrics", web::get().to(serve_metrics))
        .service(
            web::scope("/api/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(list_posts))
                        .route(web::post().to(create_post)),
                )
                .service(
                    web::resource("/{post_id}")
                        .route(web::get().to(get_post))
                        .route(web::put().to(update_post))
                        .route(web::delete().to(delete_post)),
                )
                .service(
                    web::resource("/{post_id}/comments")
                        .route(web::get().to(get_post_comments))
                        .route(web::post().to(create_comment)),
                )
                .service(
                    web::resource("/{post_id}/comments/{comment_id}")
                        .route(web::get().to(get_comment)),
                ),
        );
}
