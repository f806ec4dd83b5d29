//! Comment handlers.

use actix_web::{HttpResponse, web};

use commentary_core::services::comments;
use commentary_shared::ApiResponse;
use commentary_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use super::parse_id;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/Comment
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let comments = comments::get_all(state.begin().await?).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/Comment/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "id")?;
    let comment = comments::get_by_id(state.begin().await?, id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// GET /api/Comment/GetCommentsByPostId/{postId}
pub async fn get_by_post_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, "postId")?;
    let comments = comments::get_by_post_id(state.begin().await?, post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/Comment/GetCommentsByUserId/{userId}
pub async fn get_by_user_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_id(&path, "userId")?;
    let comments = comments::get_by_user_id(state.begin().await?, user_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/Comment/GetCommentsByPostAndUserId/{postId}/{userId}
pub async fn get_by_post_and_user(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, user_id) = path.into_inner();
    let post_id = parse_id(&post_id, "postId")?;
    let user_id = parse_id(&user_id, "userId")?;

    let comments = comments::get_by_post_and_user(state.begin().await?, post_id, user_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/Comment
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let comment =
        comments::create(state.begin().await?, &req.text, req.user_id, req.post_id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// PATCH /api/Comment
pub async fn update(
    state: web::Data<AppState>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let comment = comments::update(state.begin().await?, req.comment_id, &req.text).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /api/Comment/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "id")?;
    comments::delete(state.begin().await?, id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id, "Comment deleted")))
}
