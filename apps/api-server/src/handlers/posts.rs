//! Post handlers.

use actix_web::{HttpResponse, web};

use commentary_core::services::posts;
use commentary_shared::ApiResponse;
use commentary_shared::dto::{CreatePostRequest, UpdatePostRequest};

use super::parse_id;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/Post
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = posts::get_all(state.begin().await?).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/Post/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "id")?;
    let post = posts::get_by_id(state.begin().await?, id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/Post/GetPostsByUserId/{userId}
pub async fn get_by_user_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_id(&path, "userId")?;
    let posts = posts::get_by_user_id(state.begin().await?, user_id).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/Post
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = posts::create(state.begin().await?, req.user_id, &req.text).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/Post
pub async fn update(
    state: web::Data<AppState>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = posts::update(state.begin().await?, req.post_id, &req.text).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/Post/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "id")?;
    posts::delete(state.begin().await?, id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id, "Post deleted")))
}
