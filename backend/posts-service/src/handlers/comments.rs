/// Comment handlers - HTTP endpoints for comments nested under a post
use super::{parse_id, payload};
use crate::config::ResponseConfig;
use crate::error::{AppError, Result};
use crate::services::CommentStore;
use actix_web::{web, HttpResponse};

/// Create a comment on a post
/// POST /api/posts/{post_id}/comments
pub async fn create_comment(
    comments: web::Data<CommentStore>,
    post_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let comment = comments
        .insert_for_post(parse_id(&post_id), &payload(&body))
        .await
        .map_err(|e| {
            AppError::from_comment(
                e,
                &post_id,
                None,
                "There was an error while saving the comment to the database",
            )
        })?;

    Ok(HttpResponse::Created().json(comment))
}

/// Get comments for a post
/// GET /api/posts/{post_id}/comments
///
/// With `empty_comments_not_found` set, an existing post without comments
/// is answered with 404 rather than an empty array.
pub async fn get_post_comments(
    comments: web::Data<CommentStore>,
    settings: web::Data<ResponseConfig>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let list = comments
        .list_for_post(parse_id(&post_id))
        .await
        .map_err(|e| {
            AppError::from_comment(
                e,
                &post_id,
                None,
                "The comments information could not be retrieved",
            )
        })?;

    if list.is_empty() && settings.empty_comments_not_found {
        return Err(AppError::comments_not_found(&post_id));
    }

    Ok(HttpResponse::Ok().json(list))
}

/// Get a single comment of a post
/// GET /api/posts/{post_id}/comments/{comment_id}
pub async fn get_comment(
    comments: web::Data<CommentStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let comment = comments
        .find_for_post(parse_id(&post_id), parse_id(&comment_id))
        .await
        .map_err(|e| {
            AppError::from_comment(
                e,
                &post_id,
                Some(comment_id.as_str()),
                "The comment information could not be retrieved",
            )
        })?;

    Ok(HttpResponse::Ok().json(comment))
}
