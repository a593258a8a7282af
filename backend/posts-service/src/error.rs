/// Error types for Posts Service
///
/// Store outcomes are converted here into HTTP responses for API clients.
/// Storage faults are logged in full and rendered with a generic message.
use crate::db::StorageError;
use crate::services::{CommentError, PostError};
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for posts-service handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Input was rejected; carries the reason naming the offending fields
    ValidationError(String),

    /// Referenced resource does not exist
    NotFound(String),

    /// Storage backend failed; carries the client-facing message only
    StorageUnavailable(String),
}

impl AppError {
    /// Log a storage fault and keep only `message` for the client
    pub fn storage(message: &str, err: &StorageError) -> Self {
        tracing::error!(error = %err, "{}", message);
        AppError::StorageUnavailable(message.to_string())
    }

    pub fn post_not_found(post_id: &str) -> Self {
        AppError::NotFound(format!(
            "The post with the specified ID ({}) does not exist",
            post_id
        ))
    }

    pub fn comment_not_found(comment_id: &str) -> Self {
        AppError::NotFound(format!(
            "The comment with the specified ID ({}) does not exist for this post",
            comment_id
        ))
    }

    pub fn comments_not_found(post_id: &str) -> Self {
        AppError::NotFound(format!(
            "Comments for the post with the specified ID ({}) do not exist",
            post_id
        ))
    }

    /// Map a post store failure; `post_id` is the id as the client sent it
    pub fn from_post(err: PostError, post_id: &str, storage_message: &str) -> Self {
        match err {
            PostError::Validation(v) => AppError::ValidationError(v.reason),
            PostError::NotFound(_) => AppError::post_not_found(post_id),
            PostError::Storage(e) => AppError::storage(storage_message, &e),
        }
    }

    /// Map a comment store failure; ids are as the client sent them
    pub fn from_comment(
        err: CommentError,
        post_id: &str,
        comment_id: Option<&str>,
        storage_message: &str,
    ) -> Self {
        match err {
            CommentError::ParentNotFound(_) => AppError::post_not_found(post_id),
            CommentError::NotFound(id) => {
                AppError::comment_not_found(comment_id.unwrap_or(&id.to_string()))
            }
            CommentError::Validation(v) => AppError::ValidationError(v.reason),
            CommentError::Storage(e) => AppError::storage(storage_message, &e),
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::StorageUnavailable(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::StorageUnavailable(_) => serde_json::json!({
                "error": self.message(),
                "status": status.as_u16(),
                "diagnostic": "storage_unavailable",
            }),
            _ => serde_json::json!({
                "error": self.message(),
                "status": status.as_u16(),
            }),
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ValidationFailed;
    use actix_web::body::to_bytes;
    use uuid::Uuid;

    async fn body_json(err: &AppError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn validation_maps_to_400_with_reason() {
        let err = AppError::from_post(
            PostError::Validation(ValidationFailed {
                reason: "Please provide title and contents for the post (title: is required)".into(),
            }),
            "irrelevant",
            "unused",
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_json(&err).await;
        assert_eq!(body["status"], 400);
        assert!(body["error"].as_str().unwrap().contains("title: is required"));
    }

    #[actix_web::test]
    async fn not_found_names_the_requested_id() {
        let err = AppError::from_post(PostError::NotFound(Uuid::nil()), "abc", "unused");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = body_json(&err).await;
        assert_eq!(
            body["error"],
            "The post with the specified ID (abc) does not exist"
        );

        let parent = AppError::from_comment(CommentError::ParentNotFound(Uuid::nil()), "p1", None, "unused");
        assert_eq!(parent, AppError::post_not_found("p1"));
    }

    #[actix_web::test]
    async fn storage_fault_hides_detail() {
        let fault = StorageError::Unavailable("connection refused at 10.0.0.5:5432".into());
        let err = AppError::from_post(
            PostError::Storage(fault),
            "abc",
            "The post could not be removed",
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(&err).await;
        assert_eq!(body["error"], "The post could not be removed");
        assert_eq!(body["diagnostic"], "storage_unavailable");
        assert!(!body.to_string().contains("10.0.0.5"));
    }
}
