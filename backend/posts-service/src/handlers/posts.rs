/// Post handlers - HTTP endpoints for post operations
use super::{parse_id, payload};
use crate::error::{AppError, Result};
use crate::models::NewPostResponse;
use crate::services::PostStore;
use actix_web::{web, HttpResponse};

/// List all posts
/// GET /api/posts
pub async fn list_posts(posts: web::Data<PostStore>) -> Result<HttpResponse> {
    let all = posts
        .list_all()
        .await
        .map_err(|e| AppError::storage("The posts information could not be retrieved", &e))?;

    Ok(HttpResponse::Ok().json(all))
}

/// Get a post by ID
/// GET /api/posts/{post_id}
pub async fn get_post(
    posts: web::Data<PostStore>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post = posts
        .find_by_id(parse_id(&post_id))
        .await
        .map_err(|e| AppError::storage("The post information could not be retrieved", &e))?;

    match post {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::post_not_found(&post_id)),
    }
}

/// Create a new post
/// POST /api/posts
pub async fn create_post(posts: web::Data<PostStore>, body: web::Bytes) -> Result<HttpResponse> {
    let id = posts.insert(&payload(&body)).await.map_err(|e| {
        AppError::from_post(
            e,
            "",
            "There was an error while saving the post to the database",
        )
    })?;

    Ok(HttpResponse::Created().json(NewPostResponse { id }))
}

/// Replace a post's title and contents; responds with the updated post
/// PUT /api/posts/{post_id}
pub async fn update_post(
    posts: web::Data<PostStore>,
    post_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let updated = posts
        .update(parse_id(&post_id), &payload(&body))
        .await
        .map_err(|e| AppError::from_post(e, &post_id, "The post information could not be modified"))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a post; responds with the post as it was before deletion
/// DELETE /api/posts/{post_id}
pub async fn delete_post(
    posts: web::Data<PostStore>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let deleted = posts
        .delete(parse_id(&post_id))
        .await
        .map_err(|e| AppError::from_post(e, &post_id, "The post could not be removed"))?;

    Ok(HttpResponse::Ok().json(deleted))
}
